mod item_data;

pub use item_data::{
    HeldItemEffect,
    ItemData,
};
