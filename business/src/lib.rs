pub mod application {
    pub mod consultation {
        pub mod send_message;
    }
    pub mod discovery {
        pub mod feed;
        pub mod get_feed;
        pub mod refresh;
        pub mod select_vibe;
        pub mod swipe;
    }
    pub mod dupe {
        pub mod find_dupes;
    }
}

pub mod domain {
    pub mod logger;
    pub mod consultation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod send_message;
        }
    }
    pub mod discovery {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod session;
        pub mod use_cases {
            pub mod get_feed;
            pub mod refresh;
            pub mod select_vibe;
            pub mod swipe;
        }
    }
    pub mod dupe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod find_dupes;
        }
    }
}
