mod application;
mod model;
