//! Fixed records served in mock mode.

use chrono::NaiveDate;

use super::domain::{Event, Resource};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Annual Donor Recognition Ceremony".to_string(),
            description:
                "Join us for our annual ceremony honoring organ donors and their families."
                    .to_string(),
            date: date(2024, 9, 15),
            time: Some("2:00 PM - 5:00 PM".to_string()),
            location: "City Convention Center".to_string(),
            capacity: Some(500),
            is_featured: true,
        },
        Event {
            id: "2".to_string(),
            title: "Organ Donation Awareness Workshop".to_string(),
            description: "Learn about the importance of organ donation and how to register."
                .to_string(),
            date: date(2024, 10, 1),
            time: Some("1:00 PM - 3:00 PM".to_string()),
            location: "Community Center".to_string(),
            capacity: Some(100),
            is_featured: false,
        },
        Event {
            id: "3".to_string(),
            title: "Community Organ Donation Walkathon".to_string(),
            description: "Join us for a walkathon to raise awareness and support organ donation efforts in the community.".to_string(),
            date: date(2024, 10, 12),
            time: None,
            location: "Downtown Park".to_string(),
            capacity: None,
            is_featured: false,
        },
        Event {
            id: "4".to_string(),
            title: "Organ Donation Educational Seminar".to_string(),
            description: "An informative seminar on the process, benefits, and myths surrounding organ donation.".to_string(),
            date: date(2024, 11, 5),
            time: None,
            location: "Health Center Auditorium".to_string(),
            capacity: None,
            is_featured: false,
        },
        Event {
            id: "5".to_string(),
            title: "Organ Donor Registration Drive".to_string(),
            description: "A registration drive to encourage people to sign up as organ donors and help save lives.".to_string(),
            date: date(2024, 12, 1),
            time: None,
            location: "City Mall".to_string(),
            capacity: None,
            is_featured: false,
        },
    ]
}

pub fn sample_resources() -> Vec<Resource> {
    let entries = [
        (
            "Donor Family Guide",
            "A comprehensive guide for families of organ donors.",
            "/resources/donor-guide",
            "Guides",
        ),
        (
            "Recipient Handbook",
            "Essential information for transplant recipients.",
            "/resources/recipient-handbook",
            "Guides",
        ),
        (
            "Financial Resources",
            "Information about financial assistance and support.",
            "/resources/financial",
            "Financial",
        ),
        (
            "Legal Resources",
            "Understanding your rights and legal considerations.",
            "/resources/legal",
            "Legal",
        ),
        (
            "Mental Health Resources",
            "Support for emotional and psychological well-being.",
            "/resources/mental-health",
            "Wellbeing",
        ),
        (
            "Recovery Guidelines",
            "Tips and guidelines for post-transplant recovery.",
            "/resources/recovery",
            "Recovery",
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (title, description, url, category))| Resource {
            id: (index + 1).to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            category: category.to_string(),
        })
        .collect()
}
