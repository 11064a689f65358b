pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod graphql_error;
        pub mod http_error;
        pub mod store;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod user;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_repository;
            }
        }
        pub mod use_cases {
            pub mod get_profile {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod auth {
        pub mod core {
            pub mod claims;
            pub mod passwords;
            pub mod tokens;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod bearer;
            }
        }
        pub mod use_cases {
            pub mod register {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod tasks {
        pub mod core {
            pub mod filters;
            pub mod task;
            pub mod time_entry;
            pub mod timer;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod task_repository;
            }
        }
        pub mod use_cases {
            pub mod create_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_tasks {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_task {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_task {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod start_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod total_time {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod stats {
        pub mod core {
            pub mod aggregate;
            pub mod breakdown;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
        pub mod use_cases {
            pub mod user_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod productivity_breakdown {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
