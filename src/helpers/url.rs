//! URL helper functions

/// Path segment Ghost serves uploaded images from
pub const IMAGES_SEGMENT: &str = "content/images/";

/// Make an image path absolute by prefixing the site URL
///
/// The prefix is only added when the path does not already mention the
/// site URL somewhere, so applying it twice is a no-op.
///
/// # Examples
/// ```ignore
/// absolute_url("https://example.com", "/content/images/a.jpg") // -> "https://example.com/content/images/a.jpg"
/// ```
pub fn absolute_url(site_url: &str, path: &str) -> String {
    if path.contains(site_url) {
        path.to_string()
    } else {
        format!("{}{}", site_url, path)
    }
}

/// Point an image URL at one of Ghost's resized variants
///
/// # Examples
/// ```ignore
/// sized_image("content/images/2020/a.jpg", "w100") // -> "content/images/size/w100/2020/a.jpg"
/// ```
pub fn sized_image(url: &str, size: &str) -> String {
    let variant = format!("{}size/{}/", IMAGES_SEGMENT, size);
    url.replacen(IMAGES_SEGMENT, &variant, 1)
}
