pub mod business_profile;
pub mod contact_links;
pub mod embed;
pub mod metadata;
pub mod page;

pub use business_profile::{BusinessProfile, GeoPoint, OpeningHours, SiteSettings};
pub use contact_links::ContactLinks;
pub use embed::{youtube_embed_url, EmbedState};
pub use metadata::{local_business_json_ld, page_metadata, PageHead, PageMetadata};
pub use page::{
    AboutSection, CategoryTab, ContactForm, ContactInfo, ContactSection, FaqItem, FaqSection,
    FeatureView, FormField, Footer, HeroSection, HeroSlideView, HomePage, Link, MapCard,
    MapSection, Navigation, ProjectCard, ProjectListing, ProjectsSection, Section, SectionKind,
    SelectOption, ServiceCard, ServiceDetail, ServicePage, ServicesSection, Stat,
    TestimonialView, TestimonialsBlock, WhyUsSection,
};
