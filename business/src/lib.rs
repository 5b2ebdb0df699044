pub mod application {
    pub mod cart {
        pub mod manager;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod observer;
        pub mod store;
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod service;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
