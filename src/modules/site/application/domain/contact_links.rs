// src/modules/site/application/domain/contact_links.rs

use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use super::business_profile::BusinessProfile;

/// Click-to-contact targets shown in the hero, contact section, floating buttons and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactLinks {
    pub phone: String,
    pub tel: String,
    pub whatsapp: String,
    pub email: String,
    pub mailto: String,
    pub directions: String,
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

impl ContactLinks {
    /// `whatsapp_message` is the localized greeting pre-filled in the chat.
    pub fn build(profile: &BusinessProfile, whatsapp_message: &str) -> Self {
        let tel_number = format!("+{}", digits(&profile.phone));

        let whatsapp = match Url::parse(&format!("https://wa.me/{}", digits(&profile.whatsapp))) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("text", whatsapp_message);
                url.to_string()
            }
            Err(_) => format!("https://wa.me/{}", digits(&profile.whatsapp)),
        };

        Self {
            phone: profile.phone.clone(),
            tel: format!("tel:{tel_number}"),
            whatsapp,
            email: profile.email.clone(),
            mailto: format!("mailto:{}", profile.email),
            directions: format!(
                "https://maps.google.com/?q={},{}",
                profile.map_pin.latitude, profile.map_pin.longitude
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(phone: &str, whatsapp: &str) -> BusinessProfile {
        BusinessProfile {
            phone: phone.to_string(),
            whatsapp: whatsapp.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn tel_uri_strips_formatting() {
        let links = ContactLinks::build(&profile_with("+966 53 825 6520", "+966538256520"), "hi");
        assert_eq!(links.tel, "tel:+966538256520");
        assert_eq!(links.phone, "+966 53 825 6520");
    }

    #[test]
    fn whatsapp_link_carries_localized_message() {
        let message = "مرحباً، أريد الاستفسار عن خدماتكم";
        let links = ContactLinks::build(&profile_with("+966538256520", "+966-53-825-6520"), message);

        assert!(links.whatsapp.starts_with("https://wa.me/966538256520?text="));
        assert!(!links.whatsapp.contains(' '));

        let parsed = Url::parse(&links.whatsapp).unwrap();
        let text: Vec<_> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(text, vec![message.to_string()]);
    }

    #[test]
    fn directions_point_at_map_pin() {
        let links = ContactLinks::build(&BusinessProfile::default(), "hi");
        assert_eq!(links.directions, "https://maps.google.com/?q=21.54238,39.17243");
        assert_eq!(links.mailto, "mailto:info@fan-almizallat.com");
    }
}
