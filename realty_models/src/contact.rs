/// Deep links opened by the floating call and WhatsApp buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub call: String,
    pub whatsapp: String,
}

impl ContactLinks {
    pub fn new(phone: &str, whatsapp: &str) -> Self {
        let phone = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        let whatsapp = whatsapp
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();

        Self {
            call: format!("tel:{phone}"),
            whatsapp: format!("https://wa.me/{whatsapp}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links() {
        let links = ContactLinks::new("+91 98400 55492", "+91 98400 13421");
        assert_eq!(links.call, "tel:+919840055492");
        assert_eq!(links.whatsapp, "https://wa.me/919840013421");
    }
}
