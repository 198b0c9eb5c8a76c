//! Everything the page says about its owner, as typed data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub resume_url: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    /// Cycled by the hero's typing subtitle.
    pub phrases: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
}

impl Skill {
    /// Level as a CSS width, clamped so a typo can't overflow the bar.
    pub fn width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const PROFILE: Profile = Profile {
    name: "Udit Mittal",
    initials: "UM",
    tagline: "Software Developer, passionate about creating exceptional digital experiences.",
    intro: "Motivated learner with a blend of technical skills and adaptability. Looking forward to contributing to projects that create real value.",
    avatar: "/IMG_6655.jpg",
    email: "meet.uditmittal@gmail.com",
    location: "Saharanpur, Uttar Pradesh",
    resume_url: "https://drive.google.com/file/d/1tjxkfNaiJKgzqHYYnYP9ICBgkSnrwJli/view?usp=drive_link",
    linkedin_url: "https://www.linkedin.com/in/meetudit",
    github_url: "https://github.com/Udit2606",
    phrases: &[
        "Software Developer",
        "GenAI",
        "Problem Solver",
        "Creative Thinker",
    ],
};

pub const STORY: &[&str] = &[
    "A third-year B.Tech CSE student at VIT, passionate about technology, problem-solving, and continuous learning. I aim to apply my skills to real-world projects and grow as a professional.",
    "Summer Intern at Core Integra Global Services Pvt Ltd. – Developed a chatbot using Spring Boot, SQL, and API integration, while exploring OpenAI APIs and gaining corporate development exposure.",
    "When I'm not coding, you can find me exploring new design trends, contributing to open-source projects, or mentoring aspiring developers in the community.",
];

pub const ROLES: &[Role] = &[
    Role {
        icon: "⚡",
        title: "Perplexity Campus Partner",
        description: "Representing Perplexity AI on campus, promoting AI literacy and demonstrating cutting-edge AI tools to students and faculty.",
    },
    Role {
        icon: "👥",
        title: "Internshala Student Partner",
        description: "Promoting Internshala's platform and opportunities among students, helping peers discover internships and skill development programs.",
    },
];

pub const FOCUS_AREAS: &[(&str, &str)] = &[("🧠", "GenAI"), ("💻", "Development")];

pub const PROJECTS: &[Project] = &[Project {
    title: "E-Commerce Dashboard",
    description: "A comprehensive admin dashboard for managing online stores with real-time analytics, inventory management, and advanced reporting capabilities.",
    image: "/modern-dashboard.png",
    tags: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Chart.js"],
    code_url: "#",
    demo_url: "#",
    featured: true,
}];

pub const EXPERIENCES: &[Experience] = &[Experience {
    title: "Summer Intern",
    company: "Core Integra Global Services Pvt Ltd.",
    duration: "May 2025 - June 2025",
    description: "Developed a chatbot project by working on backend services using Spring Boot and managing SQL queries. Integrated frontend with backend APIs and explored the use of OpenAI APIs for chatbot interactions. Gained exposure to software development workflows, teamwork, and corporate project delivery. Strengthened skills in Spring Boot, SQL, API integration, backend-frontend connectivity, and improved problem-solving and communication in a corporate setting.",
}];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: "💻",
        title: "Technical",
        skills: &[
            Skill { name: "SQL", level: 90 },
            Skill { name: "Python", level: 88 },
            Skill { name: "C/C++", level: 85 },
            Skill { name: "Java", level: 82 },
            Skill { name: "HTML", level: 95 },
            Skill { name: "CSS", level: 90 },
            Skill { name: "JavaScript", level: 92 },
            Skill { name: "ReactJS", level: 88 },
            Skill { name: "Data Structures and Algorithm", level: 85 },
            Skill { name: "OOPs", level: 90 },
        ],
    },
    SkillCategory {
        icon: "⚡",
        title: "Tools",
        skills: &[Skill { name: "Spring Boot", level: 85 }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactFields;
    use crate::motion::{TypingCycler, TypingTiming};

    #[test]
    fn test_typing_phrases_are_usable() {
        assert!(TypingCycler::new(PROFILE.phrases.iter().copied(), TypingTiming::default()).is_ok());
    }

    #[test]
    fn test_profile_email_is_a_valid_mail_recipient() {
        assert!(ContactFields::default().mailto_uri(PROFILE.email).is_ok());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is over 100%", skill.name);
            }
        }
        assert_eq!(Skill { name: "x", level: 250 }.width(), "100%");
        assert_eq!(SKILL_CATEGORIES[0].skills[0].width(), "90%");
    }

    #[test]
    fn test_links_are_absolute_or_anchors() {
        let urls = [PROFILE.resume_url, PROFILE.linkedin_url, PROFILE.github_url];
        assert!(urls.iter().all(|u| u.starts_with("https://")));
        for project in PROJECTS {
            for url in [project.code_url, project.demo_url] {
                assert!(url.starts_with("https://") || url.starts_with('#'));
            }
        }
    }
}
