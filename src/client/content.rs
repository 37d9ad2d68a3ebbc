//! Static marketing content shared by the public pages.

use crate::model::{care::CareLevel, public::TestimonialDto};

pub static BUSINESS_NAME: &str = "Serene Wings Caregiving";
pub static PRIMARY_PHONE: &str = "+1(919)633-2118";
pub static SECONDARY_PHONE: &str = "+1(919)888-1810";
pub static SERVICE_AREA: &str = "Raleigh, Cary, Apex, Wake Forest, Garner and Morrisville";
pub static MISSION: &str = "To uplift the lives of seniors through reliable, heart-centered care that fosters independence, safety, and connection.";

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 7] = [
    Service {
        title: "Personal Care Assistance",
        description: "Help with bathing, grooming, dressing, and hygiene to ensure safety and dignity.",
    },
    Service {
        title: "Companion Care",
        description: "Friendly conversation, games, errands, and emotional support to reduce isolation.",
    },
    Service {
        title: "Alzheimer's & Dementia Care",
        description: "Patient, structured care from trained professionals who understand memory challenges.",
    },
    Service {
        title: "Post-Surgical Support",
        description: "Assistance with recovery after procedures, from medication reminders to mobility help.",
    },
    Service {
        title: "24/7 & Live-In Care",
        description: "Around-the-clock peace of mind with continuous care and monitoring.",
    },
    Service {
        title: "Meal Preparation & Nutrition",
        description: "Nutritious, personalized meal planning and cooking to support wellness.",
    },
    Service {
        title: "Light Housekeeping",
        description: "Keeping living spaces clean, safe, and comfortable with routine tidying and laundry.",
    },
];

/// Service type options of the consultation form as `(value, label)`.
///
/// Values are dash separated; the server turns them back into the label for the email.
pub static SERVICE_TYPES: [(&str, &str); 7] = [
    ("companion-care", "Companion Care"),
    ("personal-care", "Personal Care"),
    ("alzheimers-care", "Alzheimer's & Dementia Care"),
    ("live-in-care", "24/7 Live-In Care"),
    ("respite-care", "Respite Care"),
    ("post-hospital-care", "Post-Hospital Care"),
    ("not-sure", "Not Sure - Need Guidance"),
];

pub static PREFERRED_TIMES: [&str; 7] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
];

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub static VALUES: [Value; 4] = [
    Value {
        title: "Heart-Centered Care",
        description: "Every interaction is guided by compassion and respect.",
    },
    Value {
        title: "Safety First",
        description: "Background-checked, trained caregivers and clear care plans.",
    },
    Value {
        title: "Independence",
        description: "Support that helps seniors stay at home on their own terms.",
    },
    Value {
        title: "Family Partnership",
        description: "Regular updates so families always know how their loved one is doing.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub static TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Margaret Momanyi",
        role: "Founder & Director",
        bio: "With over 15 years in healthcare, Margaret founded Serene Wings to provide dignified, compassionate care that treats every client like family.",
    },
    TeamMember {
        name: "Alice Momanyi",
        role: "Care Coordinator",
        bio: "Alice's background in nursing and her bilingual abilities help us serve diverse families with personalized care plans.",
    },
    TeamMember {
        name: "Joe Bosire",
        role: "Senior Caregiver",
        bio: "Joe specializes in Alzheimer's and dementia care, bringing patience and specialized training to memory care clients.",
    },
];

/// Built-in reviews shown after the stored ones.
pub fn default_testimonials() -> Vec<TestimonialDto> {
    [
        (
            "Sarah Johnson",
            "North Raleigh",
            "Serene Wings has been a blessing for our family. The caregiver they provided for my mother is compassionate, professional, and truly cares about her wellbeing.",
        ),
        (
            "Michael Chen",
            "Cary",
            "The Alzheimer's care program gave us peace of mind during a very difficult time. Their specialized approach made all the difference for our father.",
        ),
        (
            "Linda Rodriguez",
            "Wake Forest",
            "Professional, reliable, and caring. Our caregiver has become like family to us. I highly recommend Serene Wings.",
        ),
    ]
    .into_iter()
    .map(|(name, location, text)| TestimonialDto {
        id: None,
        name: name.to_string(),
        rating: 5,
        text: text.to_string(),
        location: Some(location.to_string()),
        created_at: None,
    })
    .collect()
}

/// Stored testimonials followed by the built-in ones.
pub fn with_default_testimonials(mut stored: Vec<TestimonialDto>) -> Vec<TestimonialDto> {
    stored.extend(default_testimonials());
    stored
}

/// `★★★★☆` for a rating of 4.
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;

    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Care levels offered in the client form as `(level, label)`.
pub fn care_level_options() -> Vec<(CareLevel, &'static str)> {
    CareLevel::ALL
        .into_iter()
        .map(|level| (level, level.label()))
        .collect()
}
