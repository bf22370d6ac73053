//! Email helpers for logging.

/// Mask an email address for log output
///
/// Keeps the first two characters of the local part and the full domain:
/// `karolis@example.com` -> `ka***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if local.len() > 2 => {
            format!("{}***@{}", &local[..2], domain)
        }
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("karolis@example.com"), "ka***@example.com");
        assert_eq!(mask_email("ab@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
