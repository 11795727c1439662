//! Records compiled into the binary.

use crate::models::{Category, Project, Status};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The portfolio's own projects, used when no catalog file is configured.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            slug: "modern-ecommerce-platform".to_string(),
            title: "Modern E-commerce Platform".to_string(),
            short_description: "A full-stack e-commerce site built with Next.js and Stripe."
                .to_string(),
            long_description: "This project demonstrates complex state management, dynamic \
                routing, secure payment processing, and comprehensive user authentication. It \
                features a modern, responsive design and lightning-fast performance thanks to \
                server-side rendering."
                .to_string(),
            technologies: strings(&[
                "Next.js",
                "TypeScript",
                "Tailwind CSS",
                "Stripe",
                "PostgreSQL",
                "Prisma",
            ]),
            category: Category::WebApp,
            status: Status::Completed,
            featured: true,
            image: Some("/images/ecommerce-platform.jpg".to_string()),
            demo_url: Some("https://ecommerce-demo.vercel.app".to_string()),
            github_url: Some("https://github.com/yourusername/ecommerce-platform".to_string()),
            start_date: "2024-01".to_string(),
            end_date: Some("2024-06".to_string()),
            team_size: 1,
            role: "Full-Stack Developer".to_string(),
            highlights: strings(&[
                "Implemented secure payment processing with Stripe",
                "Built responsive design supporting mobile and desktop",
                "Achieved 95+ Lighthouse performance score",
                "Integrated real-time inventory management",
            ]),
            challenges: strings(&[
                "Optimizing database queries for large product catalogs",
                "Implementing complex cart logic with multiple discounts",
            ]),
        },
        Project {
            id: 2,
            slug: "realtime-chat-application".to_string(),
            title: "Real-Time Chat Application".to_string(),
            short_description: "A real-time communication platform using WebSockets.".to_string(),
            long_description: "Built to handle concurrent connections and instant message \
                delivery. Key features include user presence indicators, group chat \
                capabilities, and end-to-end encryption demonstration. The frontend is fully \
                componentized with React."
                .to_string(),
            technologies: strings(&[
                "React",
                "Node.js",
                "Socket.io",
                "Express.js",
                "MongoDB",
                "JWT",
            ]),
            category: Category::WebApp,
            status: Status::Completed,
            featured: true,
            image: Some("/images/chat-app.jpg".to_string()),
            demo_url: Some("https://chat-app-demo.vercel.app".to_string()),
            github_url: Some("https://github.com/yourusername/chat-app".to_string()),
            start_date: "2023-08".to_string(),
            end_date: Some("2023-12".to_string()),
            team_size: 2,
            role: "Frontend Lead Developer".to_string(),
            highlights: strings(&[
                "Real-time messaging with 99.9% uptime",
                "Support for 1000+ concurrent users",
                "End-to-end message encryption",
                "Mobile-responsive design",
            ]),
            challenges: strings(&[
                "Handling connection drops and reconnection logic",
                "Implementing efficient message caching strategy",
            ]),
        },
        Project {
            id: 3,
            slug: "portfolio-website".to_string(),
            title: "Portfolio Website".to_string(),
            short_description: "A responsive portfolio built with React and Framer Motion."
                .to_string(),
            long_description: "This very portfolio website showcases modern web development \
                practices including responsive design, smooth animations, and optimized \
                performance. Built with React and Vite for excellent developer experience."
                .to_string(),
            technologies: strings(&[
                "React",
                "TypeScript",
                "Tailwind CSS",
                "Framer Motion",
                "Vite",
            ]),
            category: Category::WebApp,
            status: Status::Completed,
            featured: true,
            image: None,
            demo_url: None,
            github_url: Some("https://github.com/emmadeil/portfolio".to_string()),
            start_date: "2024-09".to_string(),
            end_date: Some("2024-09".to_string()),
            team_size: 1,
            role: "Full-Stack Developer".to_string(),
            highlights: strings(&[
                "Fully responsive design across all devices",
                "Smooth animations and transitions",
                "TypeScript for better code quality",
                "Modern React patterns and hooks",
            ]),
            challenges: Vec::new(),
        },
    ]
}
