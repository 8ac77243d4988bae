mod basic;
mod flight;
