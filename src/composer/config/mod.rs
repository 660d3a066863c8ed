pub static API_URL: &str = "http://localhost:8000";
