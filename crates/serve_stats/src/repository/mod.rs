pub mod rally_log;
