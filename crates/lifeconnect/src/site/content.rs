//! Marketing copy shared by the static pages.

pub const SITE_NAME: &str = "LifeConnect";
pub const SITE_TITLE: &str = "LifeConnect - Organ Donation Awareness & Support";
pub const SITE_DESCRIPTION: &str =
    "Join our mission to save lives through organ donation awareness and registration.";
pub const HELPLINE_URL: &str = "tel:1-800-555-0000";

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Become a Donor",
        description: "Register to become an organ donor and help save lives in your community.",
    },
    FeatureCard {
        title: "Support Network",
        description: "Connect with donor families and recipients through our support groups.",
    },
    FeatureCard {
        title: "Education",
        description: "Learn about organ donation through our comprehensive resources.",
    },
    FeatureCard {
        title: "Events",
        description: "Join our awareness events and help spread the message.",
    },
];

pub struct Statistic {
    pub number: &'static str,
    pub label: &'static str,
}

pub const IMPACT_STATISTICS: [Statistic; 3] = [
    Statistic {
        number: "100K+",
        label: "Registered Donors",
    },
    Statistic {
        number: "50K+",
        label: "Lives Saved",
    },
    Statistic {
        number: "200+",
        label: "Partner Hospitals",
    },
];

pub struct TopicCard {
    pub title: &'static str,
    pub description: &'static str,
    pub topics: [&'static str; 4],
}

pub const EDUCATION_TOPICS: [TopicCard; 3] = [
    TopicCard {
        title: "Basic Information",
        description: "Learn the fundamentals of organ donation and how the process works.",
        topics: [
            "What is organ donation?",
            "Types of donation",
            "The donation process",
            "Common myths and facts",
        ],
    },
    TopicCard {
        title: "Medical Aspects",
        description:
            "Understand the medical considerations and requirements for organ donation.",
        topics: [
            "Medical eligibility",
            "Organ matching process",
            "Recovery and transplantation",
            "Success rates and outcomes",
        ],
    },
    TopicCard {
        title: "Impact Stories",
        description: "Read real stories from donors, recipients, and their families.",
        topics: [
            "Donor testimonials",
            "Recipient success stories",
            "Family experiences",
            "Healthcare perspectives",
        ],
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Who can become an organ donor?",
        answer: "Almost anyone can be a potential donor regardless of age, race, or medical history. The medical suitability for organ donation is determined at the time of death.",
    },
    Faq {
        question: "Does my religion support organ donation?",
        answer: "Most major religions support organ donation as an act of charity and generosity. Consult with your religious advisor for specific guidance.",
    },
    Faq {
        question: "Will organ donation affect my funeral arrangements?",
        answer: "No, organ donation does not affect funeral arrangements. Open-casket funerals are still possible, and there are no additional costs to the donor's family.",
    },
    Faq {
        question: "Can I choose which organs to donate?",
        answer: "Yes, you can specify which organs you wish to donate during the registration process. You can also update your preferences at any time.",
    },
];

pub struct SupportService {
    pub title: &'static str,
    pub description: &'static str,
    pub action_text: &'static str,
    pub action_url: &'static str,
}

pub const SUPPORT_SERVICES: [SupportService; 4] = [
    SupportService {
        title: "Support Groups",
        description: "Join our regular support group meetings to connect with others who understand your journey.",
        action_text: "Find a Group",
        action_url: "#groups",
    },
    SupportService {
        title: "Counseling Services",
        description:
            "Access professional counseling services specialized in transplant-related support.",
        action_text: "Schedule Session",
        action_url: "#counseling",
    },
    SupportService {
        title: "24/7 Helpline",
        description: "Our helpline is always available for immediate support and guidance.",
        action_text: "Call Now",
        action_url: HELPLINE_URL,
    },
    SupportService {
        title: "Mentorship Program",
        description: "Connect with experienced mentors who can guide you through your journey.",
        action_text: "Join Program",
        action_url: "#mentorship",
    },
];
