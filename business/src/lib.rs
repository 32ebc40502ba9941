pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod delete;
        pub mod list_items;
        pub mod remove_item;
        pub mod set_quantity;
        mod support;
        #[cfg(test)]
        mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod catalog;
        pub mod model;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete;
            pub mod list_items;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
}
