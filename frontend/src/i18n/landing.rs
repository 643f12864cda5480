use super::{Catalog, LocaleEntry};
use crate::utils::sections::Section;

pub struct NavText {
    pub home: &'static str,
    pub features: &'static str,
    pub technology: &'static str,
    pub testimonials: &'static str,
    pub contact: &'static str,
}

impl NavText {
    pub fn label(&self, section: Section) -> &'static str {
        match section {
            Section::Home => self.home,
            Section::Features => self.features,
            Section::Technology => self.technology,
            Section::Testimonials => self.testimonials,
            Section::Contact => self.contact,
        }
    }
}

pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FeaturesText {
    pub title: &'static str,
    pub items: [FeatureItem; 4],
}

pub struct TechnologyText {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub struct TestimonialsText {
    pub title: &'static str,
    pub items: [Testimonial; 3],
}

pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub struct FooterText {
    pub tagline: &'static str,
    pub rights: &'static str,
    pub links: [&'static str; 4],
}

pub struct LandingText {
    pub nav: NavText,
    pub hero: HeroText,
    pub features: FeaturesText,
    pub technology: TechnologyText,
    pub testimonials: TestimonialsText,
    pub contact: ContactText,
    pub footer: FooterText,
    /// Label for the analysis page link in the header.
    pub analyze: &'static str,
}

pub static LANDING: Catalog<LandingText> = Catalog::new(&[
    LocaleEntry {
        code: "en",
        native_name: "English",
        text: LandingText {
            nav: NavText {
                home: "Home",
                features: "Features",
                technology: "Technology",
                testimonials: "Testimonials",
                contact: "Contact",
            },
            hero: HeroText {
                title: "Redefining Medical Imaging with AI",
                subtitle: "Experience unparalleled precision in diagnostics",
                cta: "Discover the Future",
            },
            features: FeaturesText {
                title: "Revolutionary Features",
                items: [
                    FeatureItem {
                        title: "AI-Powered Analysis",
                        description: "Harness the power of advanced machine learning algorithms",
                    },
                    FeatureItem {
                        title: "Instant Results",
                        description: "Get comprehensive analysis in seconds",
                    },
                    FeatureItem {
                        title: "Unmatched Security",
                        description: "Your data protected by military-grade encryption",
                    },
                    FeatureItem {
                        title: "Seamless Integration",
                        description: "Effortlessly integrate with your existing systems",
                    },
                ],
            },
            technology: TechnologyText {
                title: "Cutting-Edge Technology",
                description: "Our AI-driven platform leverages state-of-the-art deep learning models, trained on vast datasets to provide unparalleled accuracy in medical image analysis. From detecting subtle abnormalities to assisting in complex diagnoses, our technology is at the forefront of medical innovation.",
            },
            testimonials: TestimonialsText {
                title: "Trusted by Leading Institutions",
                items: [
                    Testimonial {
                        name: "Dr. Emma Schmidt",
                        role: "Chief Radiologist, Berlin Medical Center",
                        quote: "This technology has revolutionized our diagnostic process, offering insights we never thought possible.",
                    },
                    Testimonial {
                        name: "Prof. Jean-Pierre Dubois",
                        role: "Head of Oncology, Paris University Hospital",
                        quote: "The precision and speed of this AI system have significantly improved our ability to detect and treat cancers at early stages.",
                    },
                    Testimonial {
                        name: "Dr. Sofia Rossi",
                        role: "Neurologist, Milan General Hospital",
                        quote: "An indispensable tool in our practice. It has enhanced our diagnostic capabilities exponentially.",
                    },
                ],
            },
            contact: ContactText {
                title: "Experience the Future of Medical Imaging",
                subtitle: "Join the network of elite healthcare institutions leveraging AI for unprecedented diagnostic precision.",
                cta: "Schedule a Demo",
            },
            footer: FooterText {
                tagline: "Pioneering Medical Image Analysis",
                rights: "© 2023 EliteMed AI. All rights reserved.",
                links: ["Privacy Policy", "Terms of Service", "Careers", "Press"],
            },
            analyze: "Analyze an Image",
        },
    },
    LocaleEntry {
        code: "de",
        native_name: "Deutsch",
        text: LandingText {
            nav: NavText {
                home: "Start",
                features: "Funktionen",
                technology: "Technologie",
                testimonials: "Referenzen",
                contact: "Kontakt",
            },
            hero: HeroText {
                title: "Medizinische Bildgebung neu gedacht mit KI",
                subtitle: "Erleben Sie beispiellose Präzision in der Diagnostik",
                cta: "Die Zukunft entdecken",
            },
            features: FeaturesText {
                title: "Revolutionäre Funktionen",
                items: [
                    FeatureItem {
                        title: "KI-gestützte Analyse",
                        description: "Nutzen Sie die Kraft fortschrittlicher Machine-Learning-Algorithmen",
                    },
                    FeatureItem {
                        title: "Sofortige Ergebnisse",
                        description: "Erhalten Sie umfassende Analysen in Sekundenschnelle",
                    },
                    FeatureItem {
                        title: "Unübertroffene Sicherheit",
                        description: "Ihre Daten geschützt durch militärische Verschlüsselung",
                    },
                    FeatureItem {
                        title: "Nahtlose Integration",
                        description: "Mühelose Integration in Ihre bestehenden Systeme",
                    },
                ],
            },
            technology: TechnologyText {
                title: "Modernste Technologie",
                description: "Unsere KI-gestützte Plattform nutzt modernste Deep-Learning-Modelle, die auf umfangreichen Datensätzen trainiert wurden, um eine beispiellose Genauigkeit bei der Analyse medizinischer Bilder zu bieten. Von der Erkennung subtiler Anomalien bis zur Unterstützung bei komplexen Diagnosen steht unsere Technologie an der Spitze der medizinischen Innovation.",
            },
            testimonials: TestimonialsText {
                title: "Vertraut von führenden Institutionen",
                items: [
                    Testimonial {
                        name: "Dr. Emma Schmidt",
                        role: "Chefradiologin, Berliner Medizinisches Zentrum",
                        quote: "Diese Technologie hat unseren Diagnoseprozess revolutioniert und bietet Einblicke, die wir nie für möglich gehalten hätten.",
                    },
                    Testimonial {
                        name: "Prof. Jean-Pierre Dubois",
                        role: "Leiter der Onkologie, Pariser Universitätsklinikum",
                        quote: "Die Präzision und Geschwindigkeit dieses KI-Systems haben unsere Fähigkeit, Krebserkrankungen im Frühstadium zu erkennen und zu behandeln, erheblich verbessert.",
                    },
                    Testimonial {
                        name: "Dr. Sofia Rossi",
                        role: "Neurologin, Allgemeines Krankenhaus Mailand",
                        quote: "Ein unverzichtbares Werkzeug in unserer Praxis. Es hat unsere diagnostischen Fähigkeiten exponentiell verbessert.",
                    },
                ],
            },
            contact: ContactText {
                title: "Erleben Sie die Zukunft der medizinischen Bildgebung",
                subtitle: "Schließen Sie sich dem Netzwerk von Elite-Gesundheitseinrichtungen an, die KI für eine beispiellose diagnostische Präzision nutzen.",
                cta: "Demo vereinbaren",
            },
            footer: FooterText {
                tagline: "Wegbereiter der medizinischen Bildanalyse",
                rights: "© 2023 EliteMed AI. Alle Rechte vorbehalten.",
                links: ["Datenschutzrichtlinie", "Nutzungsbedingungen", "Karriere", "Presse"],
            },
            analyze: "Bild analysieren",
        },
    },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_follow_section_order() {
        let text = LANDING.text("en");
        let labels: Vec<&str> = Section::ALL.iter().map(|s| text.nav.label(*s)).collect();
        assert_eq!(labels, ["Home", "Features", "Technology", "Testimonials", "Contact"]);
    }

    #[test]
    fn language_button_alternates_english_and_german() {
        assert_eq!(LANDING.next("en"), "de");
        assert_eq!(LANDING.next("de"), "en");
        assert_eq!(LANDING.next("fr"), "en");
    }

    #[test]
    fn german_table_is_complete() {
        let text = LANDING.text("de");
        assert_eq!(text.nav.label(Section::Contact), "Kontakt");
        assert!(text.features.items.iter().all(|item| !item.title.is_empty()));
        assert!(text.testimonials.items.iter().all(|item| !item.quote.is_empty()));
    }
}
