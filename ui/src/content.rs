//! Static page content.
//!
//! Short labels are translation keys; the long-form service and condition
//! catalogs are English copy.

pub struct Stat {
    pub number: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { number: "15+", label_key: "experience", icon: "◷" },
    Stat { number: "5000+", label_key: "patients", icon: "☺" },
    Stat { number: "35+", label_key: "published_research", icon: "★" },
];

/// Three service highlights on the home page: (title key, description key, icon).
pub const SERVICE_HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("urological_diagnostics", "urological_diagnostics_desc", "⛨"),
    ("andrological_treatment", "andrological_treatment_desc", "☺"),
    ("preventative_care", "preventative_care_desc", "♥"),
];

pub const CONDITION_KEYS: [&str; 8] = [
    "condition_bph",
    "condition_ed",
    "condition_uti",
    "condition_stones",
    "condition_prostatitis",
    "condition_infertility",
    "condition_testicular",
    "condition_bladder",
];

pub struct TimelineEntry {
    pub years: &'static str,
    /// Open-ended entry, rendered as "<years> - Present".
    pub until_present: bool,
    pub title_key: &'static str,
    pub institution_key: &'static str,
}

pub const EDUCATION: [TimelineEntry; 3] = [
    TimelineEntry {
        years: "2005 - 2011",
        until_present: false,
        title_key: "doctor_of_medicine",
        institution_key: "kyiv_medical_university",
    },
    TimelineEntry {
        years: "2011 - 2014",
        until_present: false,
        title_key: "residency_in_urology",
        institution_key: "national_medical_academy",
    },
    TimelineEntry {
        years: "2015",
        until_present: false,
        title_key: "fellowship_in_andrology",
        institution_key: "european_association",
    },
];

pub const EXPERIENCE: [TimelineEntry; 3] = [
    TimelineEntry {
        years: "2014 - 2017",
        until_present: false,
        title_key: "urologist",
        institution_key: "kyiv_city_clinical_hospital",
    },
    TimelineEntry {
        years: "2017 - 2020",
        until_present: false,
        title_key: "senior_urologist",
        institution_key: "medical_center_health",
    },
    TimelineEntry {
        years: "2020",
        until_present: true,
        title_key: "head_of_urology",
        institution_key: "medcare_clinic",
    },
];

pub const CERTIFICATIONS: [&str; 4] = [
    "european_board",
    "advanced_training",
    "laser_surgery",
    "minimally_invasive",
];

/// (title key, description key)
pub const APPROACH: [(&str, &str); 3] = [
    ("patient_centered", "patient_centered_desc"),
    ("evidence_based", "evidence_based_desc"),
    ("continuous_education", "continuous_education_desc"),
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "🔬",
        title: "Urological Diagnostics",
        description: "Comprehensive assessment using advanced imaging and laboratory tests to accurately diagnose urological conditions.",
        details: &[
            "Urinalysis and Urine Culture",
            "Prostate-Specific Antigen (PSA) Testing",
            "Urodynamic Studies",
            "Cystoscopy and Ureteroscopy",
            "Ultrasound Diagnostics",
        ],
    },
    Service {
        icon: "♂",
        title: "Male Reproductive Health",
        description: "Specialized services for addressing male reproductive health concerns and sexual dysfunction.",
        details: &[
            "Erectile Dysfunction Assessment",
            "Male Infertility Evaluation",
            "Testosterone Level Testing",
            "Sexual Health Counseling",
            "Prostate Health Management",
        ],
    },
    Service {
        icon: "⚕",
        title: "General Urology",
        description: "Treatment for a wide range of urological issues affecting the urinary tract and reproductive system.",
        details: &[
            "Urinary Tract Infections",
            "Kidney Stones",
            "Benign Prostatic Hyperplasia",
            "Bladder Control Problems",
            "Urological Cancer Screening",
        ],
    },
    Service {
        icon: "💊",
        title: "Medical Therapies",
        description: "Non-surgical treatment options utilizing the latest medications and therapeutic approaches.",
        details: &[
            "Hormone Replacement Therapy",
            "Pharmaceutical Treatments",
            "Pain Management",
            "Anti-inflammatory Therapies",
            "Antibiotics for Urological Infections",
        ],
    },
    Service {
        icon: "✓",
        title: "Preventive Urology",
        description: "Proactive measures to maintain urological health and prevent potential issues before they arise.",
        details: &[
            "Regular Prostate Exams",
            "Kidney Health Monitoring",
            "Bladder Cancer Screening",
            "Lifestyle Recommendations",
            "Nutritional Guidance for Urological Health",
        ],
    },
    Service {
        icon: "☺",
        title: "Personalized Consultations",
        description: "One-on-one consultations to address your specific concerns and develop tailored treatment plans.",
        details: &[
            "Initial Assessment",
            "Follow-up Appointments",
            "Second Opinion Consultations",
            "Family Consultations",
            "Virtual Consultations",
        ],
    },
];

/// (icon, title, description)
pub const REASONS: [(&str, &str, &str); 3] = [
    (
        "♥",
        "Patient-First Approach",
        "Your comfort and wellbeing are our top priorities throughout your treatment journey.",
    ),
    (
        "⛨",
        "Latest Medical Advances",
        "We utilize cutting-edge technology and evidence-based practices for optimal outcomes.",
    ),
    (
        "▤",
        "Comprehensive Care",
        "From diagnosis to treatment and follow-up, we provide end-to-end urological care.",
    ),
];

/// (title, description), rendered as numbered steps.
pub const PROCESS_STEPS: [(&str, &str); 4] = [
    (
        "Initial Consultation",
        "Thorough assessment of your symptoms, medical history, and concerns.",
    ),
    (
        "Diagnosis",
        "Using advanced techniques to accurately identify the cause of your symptoms.",
    ),
    (
        "Treatment Plan",
        "Developing a personalized approach to address your specific condition.",
    ),
    (
        "Follow-Up Care",
        "Ongoing support and monitoring to ensure optimal recovery and results.",
    ),
];

pub struct Condition {
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub treatment: &'static str,
}

impl Condition {
    /// Case-insensitive substring match on title and short description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.short_description.to_lowercase().contains(&needle)
    }
}

/// Conditions matching `query`, in catalog order.
pub fn filter_conditions(query: &str) -> Vec<&'static Condition> {
    CONDITIONS.iter().filter(|c| c.matches(query)).collect()
}

pub static CONDITIONS: [Condition; 8] = [
    Condition {
        title: "Benign Prostatic Hyperplasia (BPH)",
        short_description: "Non-cancerous enlargement of the prostate gland that can cause urinary symptoms.",
        description: "Benign Prostatic Hyperplasia (BPH) is a common condition in older men where the prostate gland enlarges, potentially causing urinary problems. The enlarged prostate can squeeze or partially block the urethra, causing difficulty in urination.",
        symptoms: &[
            "Frequent need to urinate, especially at night",
            "Difficulty starting urination",
            "Weak urine stream or a stream that stops and starts",
            "Dribbling at the end of urination",
            "Inability to completely empty the bladder",
        ],
        treatment: "Treatment options include lifestyle modifications, medications to relax the prostate muscles or shrink the prostate, minimally invasive procedures, and surgical interventions in more severe cases.",
    },
    Condition {
        title: "Erectile Dysfunction",
        short_description: "The inability to achieve or maintain an erection sufficient for satisfactory sexual performance.",
        description: "Erectile Dysfunction (ED) is a common condition characterized by the consistent inability to achieve or maintain an erection sufficient for sexual intercourse. It can be caused by physical factors, psychological issues, or a combination of both.",
        symptoms: &[
            "Difficulty achieving an erection",
            "Trouble maintaining an erection during sexual activities",
            "Reduced sexual desire",
        ],
        treatment: "Treatment approaches include addressing underlying health conditions, lifestyle changes, medications such as PDE5 inhibitors, therapy for psychological causes, vacuum devices, and surgical options in some cases.",
    },
    Condition {
        title: "Urinary Tract Infections (UTIs)",
        short_description: "Infection in any part of the urinary system, including kidneys, ureters, bladder, and urethra.",
        description: "Urinary Tract Infections (UTIs) occur when bacteria enter the urinary tract system, which includes your kidneys, ureters, bladder, and urethra. UTIs most commonly affect the lower urinary tract (the bladder and urethra).",
        symptoms: &[
            "Strong, persistent urge to urinate",
            "Burning sensation when urinating",
            "Cloudy, strong-smelling urine",
            "Pelvic pain in women",
            "Rectal pain in men",
        ],
        treatment: "Treatment typically involves antibiotics to kill the bacteria causing the infection. For recurrent UTIs, longer courses of antibiotics, preventive antibiotics, or other treatments may be recommended.",
    },
    Condition {
        title: "Kidney Stones",
        short_description: "Hard deposits made of minerals and salts that form inside your kidneys.",
        description: "Kidney stones are hard deposits made of minerals and salts that form inside your kidneys. They can affect any part of your urinary tract from your kidneys to your bladder. Passing kidney stones can be quite painful, but the stones usually cause no permanent damage.",
        symptoms: &[
            "Severe pain in the side and back, below the ribs",
            "Pain that radiates to the lower abdomen and groin",
            "Pain that comes in waves and fluctuates in intensity",
            "Pink, red, or brown urine",
            "Nausea and vomiting",
        ],
        treatment: "Treatment depends on the size and cause of the stones. Small stones may pass naturally with pain management and increased fluid intake. Larger stones may require medical procedures such as sound wave therapy, ureteroscopy, or percutaneous nephrolithotomy.",
    },
    Condition {
        title: "Prostatitis",
        short_description: "Inflammation of the prostate gland that can cause pelvic pain and urinary symptoms.",
        description: "Prostatitis is inflammation of the prostate gland that can cause pain in the groin, pelvic area, or genitals, and urination problems. It can be caused by a bacterial infection or other factors.",
        symptoms: &[
            "Pain or burning sensation when urinating",
            "Difficulty urinating",
            "Frequent urination, particularly at night",
            "Pain in the abdomen, groin, or lower back",
            "Pain in the perineum, penis, or testicles",
        ],
        treatment: "Treatment depends on the cause. Bacterial prostatitis is treated with antibiotics. Non-bacterial prostatitis may be treated with alpha-blockers, anti-inflammatory agents, and lifestyle changes.",
    },
    Condition {
        title: "Male Infertility",
        short_description: "Inability to cause pregnancy in a fertile female due to problems with sperm production or delivery.",
        description: "Male infertility is a condition where a man has a reduced ability to cause pregnancy in a fertile female. It's usually due to problems with sperm production or sperm function. Various factors can interfere with sperm production and reduce fertility.",
        symptoms: &[
            "Inability to conceive a child after a year of regular, unprotected sexual intercourse",
            "Problems with sexual function, such as difficulty with ejaculation",
            "Pain, swelling, or a lump in the testicle area",
            "Decreased facial or body hair or other signs of chromosomal or hormonal abnormalities",
        ],
        treatment: "Treatment depends on the cause and may include surgery, treatments for infections, hormone treatments, assisted reproductive technology, or lifestyle changes.",
    },
    Condition {
        title: "Testicular Disorders",
        short_description: "Various conditions affecting the testicles, including inflammation, torsion, and cancer.",
        description: "Testicular disorders encompass a range of conditions affecting the male reproductive glands. These include inflammation (orchitis), testicular torsion (twisting of the testicle), varicocele (enlarged veins), and testicular cancer.",
        symptoms: &[
            "Pain or discomfort in a testicle or the scrotum",
            "Swelling or lump in the testicle",
            "Feeling of heaviness in the scrotum",
            "Dull ache in the abdomen or groin",
            "Sudden pain in the testicle or scrotum (emergency in case of torsion)",
        ],
        treatment: "Treatment varies by condition. Infections may require antibiotics, torsion needs emergency surgery, varicoceles may be surgically corrected, and testicular cancer treatment depends on the stage and type.",
    },
    Condition {
        title: "Bladder Cancer",
        short_description: "Cancer that begins in the cells lining the inside of the bladder.",
        description: "Bladder cancer is a type of cancer that begins in the cells of the bladder, a hollow muscular organ in the lower abdomen that stores urine. Most bladder cancers start in the cells that line the inside of the bladder (urothelial cells).",
        symptoms: &[
            "Blood in urine (hematuria)",
            "Frequent urination",
            "Painful urination",
            "Back pain",
            "Pelvic pain",
        ],
        treatment: "Treatment options depend on the stage and grade of the cancer, as well as overall health. They may include surgery, intravesical therapy, chemotherapy, radiation therapy, immunotherapy, and targeted therapy.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Do I need a referral to book a consultation?",
        answer: "No. You can book directly by phone or through the contact form; bring any previous test results you have.",
    },
    Faq {
        question: "How should I prepare for my first visit?",
        answer: "Arrive a few minutes early, bring a list of current medications, and avoid urinating for an hour beforehand in case a urine test is needed.",
    },
    Faq {
        question: "Are consultations confidential?",
        answer: "Yes. All consultations and medical records are strictly confidential and handled in line with patient privacy law.",
    },
    Faq {
        question: "Do you offer online consultations?",
        answer: "Yes, follow-up and second-opinion consultations are available by video call.",
    },
];

/// Accordion state: clicking the open item closes it, any other opens it.
pub fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_every_condition() {
        assert_eq!(filter_conditions("").len(), CONDITIONS.len());
        assert_eq!(filter_conditions("   ").len(), CONDITIONS.len());
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let titles: Vec<_> = filter_conditions("KIDNEY").iter().map(|c| c.title).collect();
        // UTIs mention kidneys in their short description.
        assert_eq!(titles, vec!["Urinary Tract Infections (UTIs)", "Kidney Stones"]);
    }

    #[test]
    fn search_covers_short_description() {
        let titles: Vec<_> = filter_conditions("prostate gland").iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Benign Prostatic Hyperplasia (BPH)", "Prostatitis"]
        );
    }

    #[test]
    fn search_with_no_match_is_empty() {
        assert!(filter_conditions("migraine").is_empty());
    }

    #[test]
    fn accordion_opens_one_item_at_a_time() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
        assert_eq!(toggle_expanded(Some(2), 0), Some(0));
    }

    #[test]
    fn condition_keys_and_catalog_line_up() {
        assert_eq!(CONDITION_KEYS.len(), CONDITIONS.len());
    }

    #[test]
    fn every_content_key_is_translated() {
        use crate::i18n::{Catalog, Language};

        let mut keys: Vec<&str> = Vec::new();
        keys.extend(STATS.iter().map(|s| s.label_key));
        keys.extend(SERVICE_HIGHLIGHTS.iter().flat_map(|(t, d, _)| [*t, *d]));
        keys.extend(CONDITION_KEYS);
        keys.extend(EDUCATION.iter().chain(&EXPERIENCE).flat_map(|e| [e.title_key, e.institution_key]));
        keys.extend(CERTIFICATIONS);
        keys.extend(APPROACH.iter().flat_map(|(t, d)| [*t, *d]));

        let catalog = Catalog::embedded();
        for lang in Language::ALL {
            let missing: Vec<_> = keys.iter().filter(|k| !catalog.contains(lang, k)).collect();
            assert!(missing.is_empty(), "{lang} lacks {missing:?}");
        }
    }
}
