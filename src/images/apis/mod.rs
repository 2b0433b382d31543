pub mod rapidapi;
