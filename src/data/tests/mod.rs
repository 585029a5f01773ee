mod inventory;
mod item;
mod membership;
mod placement;
