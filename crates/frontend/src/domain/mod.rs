pub mod a001_script_request;
