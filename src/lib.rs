pub mod shared {
    pub mod core {
        pub mod pagination;
    }
    pub mod infrastructure {
        pub mod backend_client;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod aggregate;
            pub mod entry;
            pub mod grid;
            pub mod time_format;
            pub mod visibility;
            pub mod week;
        }
        pub mod use_cases {
            pub mod load_time_entries {
                pub mod handler;
            }
            pub mod resolve_viewer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod timesheets_api;
                pub mod timesheets_http;
                pub mod timesheets_in_memory;
            }
        }
    }
    pub mod roles {
        pub mod core {
            pub mod list_response;
            pub mod role;
        }
        pub mod use_cases {
            pub mod manage_roles {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod roles_api;
                pub mod roles_http;
                pub mod roles_in_memory;
            }
        }
    }
}

pub mod shell;
