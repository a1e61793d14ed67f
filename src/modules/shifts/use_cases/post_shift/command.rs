/// A posting as received from a transport, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostShift {
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub time: String,
    pub phone: String,
    pub notes: Option<String>,
}
