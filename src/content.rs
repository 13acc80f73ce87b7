//! Literal display strings for the portfolio.
//!
//! Everything the page shows lives here as static data; the renderer only decides how it looks.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Accent colour names, mapped to terminal colours by the renderer.
pub enum Tone {
    /// Main brand accent.
    Primary,
    /// Positive/online accent.
    Success,
    /// Secondary brand accent.
    Secondary,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Teal.
    Teal,
    /// Orange.
    Orange,
}

#[derive(Debug, Serialize)]
/// Short title and description pair.
pub struct Card {
    /// Heading.
    pub title: &'static str,
    /// One-line description.
    pub desc: &'static str,
    /// Accent for the card icon.
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
/// A technology in the skills grid.
pub struct Skill {
    /// Display name.
    pub name: &'static str,
    /// Icon colour.
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
/// A featured project card.
pub struct Project {
    /// Project name.
    pub title: &'static str,
    /// Summary paragraph.
    pub description: &'static str,
    /// Technology tags.
    pub tech: &'static [&'static str],
    /// Banner colour.
    pub tone: Tone,
}

impl Project {
    #[must_use]
    /// Monogram built from the first letter of each word of the title.
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Serialize)]
/// A role in the experience timeline.
pub struct Role {
    /// Job title.
    pub title: &'static str,
    /// Employer.
    pub company: &'static str,
    /// Date range.
    pub period: &'static str,
    /// Summary paragraph.
    pub description: &'static str,
    /// Bullet points.
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Serialize)]
/// A labelled contact detail.
pub struct ContactMethod {
    /// Label, e.g. "Email".
    pub title: &'static str,
    /// Value shown under the label.
    pub value: &'static str,
    /// Icon colour.
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
/// Everything shown on the page.
pub struct Content {
    /// Full name used in the nav bar and footer.
    pub name: &'static str,
    /// Name used in the hero greeting.
    pub short_name: &'static str,
    /// Hero subtitle.
    pub headline: &'static str,
    /// Hero paragraph.
    pub intro: &'static str,
    /// About section subtitle.
    pub about_title: &'static str,
    /// About section paragraphs.
    pub about: &'static [&'static str],
    /// Focus area grid in the about section.
    pub focus_areas: &'static [Card],
    /// Highlight cards in the about section.
    pub highlights: &'static [Card],
    /// Skills grid.
    pub skills: &'static [Skill],
    /// Project cards.
    pub projects: &'static [Project],
    /// Experience timeline, most recent first.
    pub experience: &'static [Role],
    /// Text under the contact heading.
    pub contact_blurb: &'static str,
    /// Contact details.
    pub contact_methods: &'static [ContactMethod],
    /// Social profile names.
    pub socials: &'static [&'static str],
    /// Footer paragraph.
    pub footer_blurb: &'static str,
}

/// The portfolio shown by the binary.
pub static PORTFOLIO: Content = Content {
    name: "Elangovan",
    short_name: "Elango",
    headline: "Full Stack Developer & DevOps Engineer",
    intro: "I specialize in building scalable web applications with Python Django, React, and \
            modern DevOps practices. Passionate about creating efficient, user-friendly solutions.",
    about_title: "Full Stack Developer with DevOps Expertise",
    about: &[
        "I'm a passionate developer with over 3 years of experience in building scalable web \
         applications. My expertise spans across Python Django backend development, React \
         frontend, and modern DevOps practices.",
        "I love solving complex problems and creating efficient solutions that make a real \
         impact. When I'm not coding, you'll find me exploring new technologies or contributing \
         to open-source projects.",
    ],
    focus_areas: &[
        Card {
            title: "Frontend",
            desc: "React, JavaScript, HTML/CSS",
            tone: Tone::Primary,
        },
        Card {
            title: "Backend",
            desc: "Python, Django, REST APIs",
            tone: Tone::Primary,
        },
        Card {
            title: "DevOps",
            desc: "Docker, Kubernetes, AWS",
            tone: Tone::Primary,
        },
        Card {
            title: "Database",
            desc: "PostgreSQL, MongoDB",
            tone: Tone::Primary,
        },
    ],
    highlights: &[
        Card {
            title: "Clean Code",
            desc: "Writing maintainable, scalable code",
            tone: Tone::Primary,
        },
        Card {
            title: "DevOps",
            desc: "Automation & deployment expertise",
            tone: Tone::Success,
        },
        Card {
            title: "Database Design",
            desc: "Efficient data architecture",
            tone: Tone::Secondary,
        },
    ],
    skills: &[
        Skill {
            name: "Python",
            tone: Tone::Yellow,
        },
        Skill {
            name: "Django",
            tone: Tone::Green,
        },
        Skill {
            name: "React",
            tone: Tone::Blue,
        },
        Skill {
            name: "Vite",
            tone: Tone::Purple,
        },
        Skill {
            name: "Tailwind",
            tone: Tone::Teal,
        },
        Skill {
            name: "Docker",
            tone: Tone::Blue,
        },
        Skill {
            name: "Kubernetes",
            tone: Tone::Blue,
        },
        Skill {
            name: "AWS",
            tone: Tone::Orange,
        },
    ],
    projects: &[
        Project {
            title: "E-Commerce Platform",
            description: "Full-stack e-commerce solution built with Django and React, featuring \
                          payment integration and admin dashboard.",
            tech: &["Django", "React", "PostgreSQL", "Stripe"],
            tone: Tone::Primary,
        },
        Project {
            title: "Task Management App",
            description: "Collaborative task management application with real-time updates and \
                          team collaboration features.",
            tech: &["React", "Node.js", "Socket.io", "MongoDB"],
            tone: Tone::Success,
        },
        Project {
            title: "DevOps Pipeline",
            description: "Automated CI/CD pipeline with Docker containerization and Kubernetes \
                          deployment on AWS.",
            tech: &["Docker", "Kubernetes", "AWS", "Jenkins"],
            tone: Tone::Secondary,
        },
    ],
    experience: &[
        Role {
            title: "Senior Full Stack Developer",
            company: "Tech Solutions Inc.",
            period: "2022 - Present",
            description: "Led development of scalable web applications using Django and React. \
                          Implemented DevOps practices and mentored junior developers.",
            achievements: &[
                "Reduced deployment time by 60% through CI/CD automation",
                "Built microservices architecture serving 100K+ users",
                "Mentored 5 junior developers",
            ],
        },
        Role {
            title: "DevOps Engineer",
            company: "Cloud Systems Ltd.",
            period: "2021 - 2022",
            description: "Managed cloud infrastructure and implemented automated deployment \
                          pipelines using Docker and Kubernetes.",
            achievements: &[
                "Migrated legacy systems to containerized architecture",
                "Achieved 99.9% uptime for production systems",
                "Reduced infrastructure costs by 40%",
            ],
        },
    ],
    contact_blurb: "I'm always interested in new opportunities and exciting projects. Let's \
                    discuss how we can work together.",
    contact_methods: &[
        ContactMethod {
            title: "Email",
            value: "elango@example.com",
            tone: Tone::Primary,
        },
        ContactMethod {
            title: "Phone",
            value: "+1 (555) 123-4567",
            tone: Tone::Success,
        },
        ContactMethod {
            title: "Location",
            value: "San Francisco, CA",
            tone: Tone::Secondary,
        },
    ],
    socials: &["GitHub", "LinkedIn"],
    footer_blurb: "Full Stack Developer passionate about creating scalable web applications and \
                   implementing modern DevOps practices.",
};
