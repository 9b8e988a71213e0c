pub mod prediction_controller;
pub mod prediction_service;
