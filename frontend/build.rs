//! 把 `.env` 中的后端地址注入编译期环境，供 `option_env!` 读取

use std::env;
use std::fs;

const API_BASE_URL_ENV: &str = "SHOPCART_API_BASE_URL";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed={API_BASE_URL_ENV}");

    // 显式设置的环境变量优先于 .env
    if env::var(API_BASE_URL_ENV).is_ok() {
        return;
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        return;
    };

    let base_url = contents
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .find(|(key, _)| key.trim() == API_BASE_URL_ENV)
        .map(|(_, value)| value.trim().trim_matches('"'));

    if let Some(url) = base_url.filter(|u| !u.is_empty()) {
        println!("cargo:rustc-env={API_BASE_URL_ENV}={url}");
    }
}
