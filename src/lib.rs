pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod identity;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod employee_locks;
        pub mod identity {
            pub mod in_memory;
        }
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod durations;
            pub mod entry_type;
            pub mod state;
            pub mod summary;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod record_transition {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod today_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod work_report {
                pub mod csv_export;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
                pub mod range_query;
                pub mod responses;
            }
            pub mod outbound {
                pub mod time_entry_store;
                pub mod time_entry_store_in_memory;
                pub mod time_entry_store_sqlite;
            }
        }
    }
}

pub mod shell;
