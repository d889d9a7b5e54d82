pub mod contact;
pub mod damage_modifiers;
pub mod immunity;
pub mod intimidate;
pub mod priority;
pub mod residuals;
pub mod speed;
pub mod stat_modifiers;
pub mod weather_setters;
