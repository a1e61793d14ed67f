pub mod shared {
    pub mod infrastructure {
        pub mod snapshot_feed;
    }
}

pub mod modules {
    pub mod shifts {
        pub mod core {
            pub mod admission;
            pub mod contact;
            pub mod date_index;
            pub mod ports;
            pub mod shift;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod post_shift {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod check_admission {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_shifts_by_date {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod contact_poster {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod shift_store_in_memory;
            }
        }
    }
}

pub mod shell;
