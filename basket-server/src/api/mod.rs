//! HTTP API handlers for basket-server

pub mod health;
pub mod recipes;
pub mod shopping_list;

pub use health::health_routes;
pub use recipes::{
    add_recipe, get_recipe, list_recipes, remove_ingredient_from_recipe,
    remove_ingredient_globally, remove_recipe,
};
pub use shopping_list::{clear_shopping_list, get_shopping_list, print_shopping_list};
