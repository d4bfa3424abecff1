pub mod a001_service;
