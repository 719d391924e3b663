//! Company contact links shared by the pages

use ammaar_catalog::{Project, COMPANY_INFO};
use ammaar_common::SiteConfig;
use ammaar_leads::content::{project_enquiry_text, tel_link, whatsapp_link, GENERAL_ENQUIRY_TEXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    whatsapp: String,
    phone: String,
}

impl ContactLinks {
    pub fn new(whatsapp: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            whatsapp: whatsapp.into(),
            phone: phone.into(),
        }
    }

    /// Configured overrides, falling back to the published company contact
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config
                .whatsapp
                .as_deref()
                .unwrap_or(COMPANY_INFO.contact.whatsapp),
            config.phone.as_deref().unwrap_or(COMPANY_INFO.contact.phone),
        )
    }

    pub fn whatsapp_number(&self) -> &str {
        &self.whatsapp
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Floating WhatsApp button and "chat with us" call-to-actions
    pub fn general_enquiry(&self) -> String {
        whatsapp_link(&self.whatsapp, GENERAL_ENQUIRY_TEXT)
    }

    /// WhatsApp call-to-action inside the property modal
    pub fn project_enquiry(&self, project: &Project) -> String {
        whatsapp_link(
            &self.whatsapp,
            &project_enquiry_text(&project.title, &project.price),
        )
    }

    pub fn call(&self) -> String {
        tel_link(&self.phone)
    }
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
