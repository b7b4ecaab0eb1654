mod booking;
mod item;
mod user;
