pub mod config;

pub mod domain {
    pub mod shared {
        pub mod errors;
    }
    pub mod record {
        pub mod entity;
        pub mod repository;
    }
    pub mod like {
        pub mod entity;
        pub mod repository;
    }
    pub mod analytics {
        pub mod aggregation;
    }
    pub mod guide {
        pub mod entity;
    }
}

pub mod application {
    pub mod record_growth {
        pub mod dto;
        pub mod use_case;
    }
    pub mod social {
        pub mod dto;
        pub mod use_case;
    }
    pub mod analytics {
        pub mod use_case;
    }
}

pub mod infrastructure {
    pub mod database {
        pub mod pool;
    }
    pub mod repositories {
        pub mod sqlx_like_repository;
        pub mod sqlx_record_repository;
    }
    pub mod storage {
        pub mod local_storage_service;
        pub mod traits;
    }
}

pub mod presentation {
    pub mod http {
        pub mod errors;
        pub mod routes;
        pub mod state;
        pub mod views;
        pub mod handlers {
            pub mod analytics;
            pub mod docs;
            pub mod gallery;
            pub mod guides;
            pub mod health;
            pub mod home;
            pub mod records;
            pub mod social;
        }
        pub mod middleware {
            pub mod logging;
            pub mod request_id;
        }
    }
}
