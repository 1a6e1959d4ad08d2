use super::{InternId, InternRecord};
use time::{Date, Month};

struct Seed {
    id: u32,
    name: &'static str,
    email: &'static str,
    department: &'static str,
    role: &'static str,
    start: (i32, Month, u8),
    photo: &'static str,
    bio: &'static str,
    skills: [&'static str; 4],
    projects: [&'static str; 2],
    mentor: &'static str,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: 1,
        name: "Alex Johnson",
        email: "alex.johnson@company.com",
        department: "Engineering",
        role: "Frontend Developer Intern",
        start: (2025, Month::January, 15),
        photo: "https://randomuser.me/api/portraits/men/32.jpg",
        bio: "Computer Science student with a passion for creating intuitive user interfaces and seamless user experiences.",
        skills: ["React", "TypeScript", "CSS", "UI/UX"],
        projects: ["Company Website Redesign", "Internal Dashboard"],
        mentor: "Sarah Williams",
    },
    Seed {
        id: 2,
        name: "Maya Patel",
        email: "maya.patel@company.com",
        department: "Design",
        role: "UI/UX Design Intern",
        start: (2025, Month::February, 1),
        photo: "https://randomuser.me/api/portraits/women/44.jpg",
        bio: "Design student focused on creating accessible and beautiful digital experiences.",
        skills: ["Figma", "Adobe XD", "Prototyping", "User Research"],
        projects: ["Mobile App Redesign", "Design System"],
        mentor: "David Chen",
    },
    Seed {
        id: 3,
        name: "Jamal Wilson",
        email: "jamal.wilson@company.com",
        department: "Data Science",
        role: "Data Analyst Intern",
        start: (2025, Month::January, 10),
        photo: "https://randomuser.me/api/portraits/men/22.jpg",
        bio: "Statistics major with a knack for finding patterns in complex datasets and visualizing insights.",
        skills: ["Python", "R", "SQL", "Data Visualization"],
        projects: ["Customer Segmentation", "Sales Prediction Model"],
        mentor: "Lisa Rodriguez",
    },
    Seed {
        id: 4,
        name: "Emma Chen",
        email: "emma.chen@company.com",
        department: "Marketing",
        role: "Digital Marketing Intern",
        start: (2025, Month::February, 15),
        photo: "https://randomuser.me/api/portraits/women/29.jpg",
        bio: "Marketing student specializing in digital campaigns and social media strategy.",
        skills: ["Social Media", "Content Creation", "Analytics", "SEO"],
        projects: ["Q1 Social Media Campaign", "Email Marketing Automation"],
        mentor: "Michael Thompson",
    },
    Seed {
        id: 5,
        name: "Carlos Rodriguez",
        email: "carlos.rodriguez@company.com",
        department: "Engineering",
        role: "Backend Developer Intern",
        start: (2025, Month::January, 5),
        photo: "https://randomuser.me/api/portraits/men/67.jpg",
        bio: "Computer Engineering student with a focus on scalable backend systems and API design.",
        skills: ["Node.js", "Express", "MongoDB", "API Design"],
        projects: ["API Gateway Implementation", "Database Optimization"],
        mentor: "Jennifer Lee",
    },
    Seed {
        id: 6,
        name: "Sophia Kim",
        email: "sophia.kim@company.com",
        department: "Product",
        role: "Product Management Intern",
        start: (2025, Month::February, 10),
        photo: "https://randomuser.me/api/portraits/women/60.jpg",
        bio: "Business and Technology student passionate about bridging the gap between user needs and technical solutions.",
        skills: ["Product Strategy", "User Stories", "Market Research", "Agile"],
        projects: ["Feature Prioritization Framework", "User Feedback System"],
        mentor: "Robert Jackson",
    },
    Seed {
        id: 7,
        name: "Tyler Smith",
        email: "tyler.smith@company.com",
        department: "Engineering",
        role: "DevOps Intern",
        start: (2025, Month::January, 20),
        photo: "https://randomuser.me/api/portraits/men/52.jpg",
        bio: "IT student focused on automating deployment processes and improving system reliability.",
        skills: ["Docker", "Kubernetes", "CI/CD", "AWS"],
        projects: ["Deployment Pipeline Automation", "Monitoring System Setup"],
        mentor: "Amanda Garcia",
    },
    Seed {
        id: 8,
        name: "Zoe Williams",
        email: "zoe.williams@company.com",
        department: "HR",
        role: "HR Operations Intern",
        start: (2025, Month::February, 5),
        photo: "https://randomuser.me/api/portraits/women/14.jpg",
        bio: "Human Resources student with an interest in improving employee experience and organizational development.",
        skills: ["Recruitment", "Employee Relations", "HRIS", "Onboarding"],
        projects: ["Onboarding Process Redesign", "Employee Satisfaction Survey"],
        mentor: "Thomas Wilson",
    },
];

/// Materialize the bundled roster in its canonical order.
pub fn builtin_records() -> Vec<InternRecord> {
    SEEDS.iter().filter_map(record_from_seed).collect()
}

fn record_from_seed(seed: &Seed) -> Option<InternRecord> {
    let (year, month, day) = seed.start;
    // Seed dates are literals; an invalid one would be dropped rather than panic.
    let start_date = Date::from_calendar_date(year, month, day).ok()?;
    Some(InternRecord {
        id: InternId(seed.id),
        name: seed.name.to_string(),
        email: seed.email.to_string(),
        department: seed.department.to_string(),
        role: seed.role.to_string(),
        start_date,
        photo: seed.photo.to_string(),
        bio: seed.bio.to_string(),
        skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        projects: seed.projects.iter().map(|s| s.to_string()).collect(),
        mentor: seed.mentor.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_materializes() {
        let records = builtin_records();
        assert_eq!(records.len(), SEEDS.len());
        assert_eq!(records[4].start_date.to_string(), "2025-01-05");
        assert_eq!(records[7].skills[3], "Onboarding");
    }
}
