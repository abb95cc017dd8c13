pub mod application {
    pub mod food_details {
        pub mod finish_order;
        pub mod load;
        pub mod screen;
        pub mod toggle_favorite;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod favorite {
        pub mod model;
        pub mod repository;
    }
    pub mod food {
        pub mod model;
        pub mod repository;
    }
    pub mod food_details {
        pub mod errors;
        pub mod reducers;
        pub mod services;
        pub mod state;
        pub mod view;
        pub mod use_cases {
            pub mod finish_order;
            pub mod load;
            pub mod toggle_favorite;
        }
    }
    pub mod order {
        pub mod model;
        pub mod repository;
    }
    pub mod shared {
        pub mod currency;
        pub mod value_objects;
    }
}
