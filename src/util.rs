use chrono::NaiveDateTime;

static IMAGE_URL_DELIMITER: char = ',';

/// local wall clock time, the way every created/modified column is stored
pub fn now() -> NaiveDateTime {
    chrono::offset::Local::now().naive_local()
}

/// joins the image urls of a material into the single column they're stored in.
/// Blank entries are dropped so they don't come back as empty urls
pub fn join_image_urls(urls: &[String]) -> String {
    urls.iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .collect::<Vec<&str>>()
        .join(&IMAGE_URL_DELIMITER.to_string())
}

/// the inverse of [`join_image_urls`]. An empty column gives back an empty list
pub fn split_image_urls(joined: &str) -> Vec<String> {
    joined
        .split(IMAGE_URL_DELIMITER)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}
