//! Demo content the portfolio ships with.
//!
//! There is no durable storage: the server's in-memory repositories and the
//! client's fixture catalog source are both seeded from these records.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::catalog::{parse_technologies, Achievement, Category, Project};
use crate::types::{DbId, Timestamp};
use crate::user::User;

/// Id of the portfolio owner in [`users`].
pub const OWNER_ID: DbId = 1;

/// Id of the demo visitor in [`users`].
pub const VISITOR_ID: DbId = 2;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn category(id: DbId, name: &str, color: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
        color: color.to_string(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Web Development", "#00ff88"),
        category(2, "Mobile Apps", "#7209b7"),
        category(3, "Data Science", "#ff6b35"),
        category(4, "DevOps", "#0f3460"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: DbId,
    title: &str,
    description: &str,
    demo_url: Option<&str>,
    github_url: &str,
    technologies: &str,
    is_featured: bool,
    category_id: DbId,
    counters: (u64, u64, u64),
    created_at: Timestamp,
) -> Project {
    let (likes_count, comments_count, views) = counters;
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        content: Some(format!("{description}\n\nSource: {github_url}")),
        image_url: None,
        demo_url: demo_url.map(str::to_string),
        github_url: Some(github_url.to_string()),
        technologies: parse_technologies(technologies),
        is_featured,
        is_published: true,
        category_id: Some(category_id),
        category: None,
        likes_count,
        comments_count,
        views,
        created_at,
        updated_at: Some(created_at),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-commerce Platform",
            "Full e-commerce platform built with React, Node.js and PostgreSQL. \
             Integrated payments, stock management and an admin panel.",
            Some("https://demo.example.com"),
            "https://github.com/example/ecommerce",
            r#"["React", "Node.js", "PostgreSQL", "Stripe", "Docker"]"#,
            true,
            1,
            (24, 8, 156),
            at(2024, 1, 15, 10, 0),
        ),
        project(
            2,
            "Task Management App",
            "Task management app with an intuitive interface, real-time \
             collaboration and cloud sync.",
            Some("https://tasks.example.com"),
            "https://github.com/example/tasks",
            r#"["React Native", "Firebase", "Redux", "TypeScript"]"#,
            false,
            2,
            (18, 5, 89),
            at(2024, 2, 20, 14, 30),
        ),
        project(
            3,
            "Data Analytics Dashboard",
            "Interactive analytics dashboard with real-time charts, custom \
             reports and multiple data source integrations.",
            None,
            "https://github.com/example/analytics",
            r#"["Python", "Pandas", "Plotly", "Streamlit", "PostgreSQL"]"#,
            true,
            3,
            (31, 12, 203),
            at(2024, 3, 10, 9, 15),
        ),
        project(
            4,
            "CI/CD Pipeline Automation",
            "Automated continuous integration and delivery with Docker, \
             Kubernetes and advanced monitoring.",
            None,
            "https://github.com/example/cicd",
            r#"["Docker", "Kubernetes", "Jenkins", "Terraform", "AWS"]"#,
            false,
            4,
            (15, 3, 67),
            at(2024, 4, 5, 16, 45),
        ),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    let achievement = |id: DbId,
                       title: &str,
                       organization: &str,
                       date: Option<NaiveDate>,
                       is_featured: bool,
                       category_id: DbId| Achievement {
        id,
        title: title.to_string(),
        description: format!("{title}, awarded by {organization}."),
        content: None,
        image_url: None,
        certificate_url: None,
        date_achieved: date,
        organization: Some(organization.to_string()),
        is_featured,
        is_published: true,
        category_id: Some(category_id),
        category: None,
        likes_count: 0,
        comments_count: 0,
        created_at: at(2024, 5, 1, 12, 0),
        updated_at: None,
    };

    vec![
        achievement(
            1,
            "AWS Certified Solutions Architect",
            "Amazon Web Services",
            NaiveDate::from_ymd_opt(2023, 11, 20),
            true,
            4,
        ),
        achievement(
            2,
            "Hackathon Winner: Smart Cities",
            "Open Data Week",
            NaiveDate::from_ymd_opt(2023, 6, 12),
            false,
            1,
        ),
        achievement(
            3,
            "Machine Learning Specialization",
            "Stanford Online",
            NaiveDate::from_ymd_opt(2022, 9, 30),
            true,
            3,
        ),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: OWNER_ID,
            username: "alexis".into(),
            email: "alexis@portfolio.com".into(),
            first_name: "Alexis".into(),
            last_name: "Moreau".into(),
            is_admin: true,
            is_active: true,
            created_at: at(2024, 1, 1, 0, 0),
        },
        User {
            id: VISITOR_ID,
            username: "visitor".into(),
            email: "visitor@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            is_admin: false,
            is_active: true,
            created_at: at(2024, 2, 1, 0, 0),
        },
    ]
}
