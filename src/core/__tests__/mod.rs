mod config_test;
mod parallel_test;
mod params_test;
