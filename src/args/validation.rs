use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_endpoint_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!(
            "'{value}' uses scheme '{other}'; only http and https are supported."
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the id is empty, contains whitespace, or contains
/// html markup characters
pub fn check_element_id(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("The target element id cannot be empty.".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("The target element id '{value}' contains whitespace."));
    }
    if value.chars().any(|c| matches!(c, '"' | '\'' | '<' | '>' | '&')) {
        return Err(format!(
            "The target element id '{value}' contains one of \" ' < > &."
        ));
    }
    Ok(value.to_string())
}
