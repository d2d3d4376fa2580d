pub mod location;
pub mod measurement;
pub mod precipitation;
pub mod raw;
pub mod series;
pub mod warning;
pub mod weather_condition;
pub mod weather_data;
pub mod wind;
