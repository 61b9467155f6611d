// This file makes the screen modules available to the rest of the application.

pub mod account;
pub mod alerts;
pub mod home;
