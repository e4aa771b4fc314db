//! Static copy for the informational pages. Authored once, never mutated.

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSection {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub email: Option<&'static str>,
}

pub const PROJECT_SECTIONS: &[ProjectSection] = &[
    ProjectSection {
        id: "understanding",
        title: "1. Problem Understanding",
        content: "Objective: Extract fundamental Statcast metrics (e.g., pitch speed, exit velocity) from archival baseball game videos using computer vision and AI.\n\nDeliverables:\n- Hosted project URL\n- Project description\n- Open-source code repository\n- Insights and findings",
    },
    ProjectSection {
        id: "dataset",
        title: "2. Dataset Preparation",
        content: "Archival Videos:\n- Collect old baseball game videos (ensure usage rights)\n- Use publicly available MLB archival datasets\n- Licensed materials\n\nAnnotations:\n- If no labeled data exists, annotate key metrics manually\n- Semi-automatic annotation for training/testing\n\nData Cleaning:\n- Standardize video formats\n- Segment clips\n- Ensure quality for computer vision tasks",
    },
    ProjectSection {
        id: "tech-stack",
        title: "3. Technology Stack",
        content: "Google Cloud Platform Tools:\n- Vertex AI: Train and deploy machine learning models\n- Google Cloud Storage: Store video datasets and outputs\n- Google Cloud Functions: Host APIs for metric extraction\n- Cloud Run: Deploy the application\n- BigQuery: Store extracted Statcast metrics\n- Gemini AI: Advanced NLP integration\n- Imagen: Enhance visual analysis",
    },
    ProjectSection {
        id: "pipeline",
        title: "4. Solution Pipeline",
        content: "Step 1: Extract Video Frames\n- Use OpenCV for frame extraction\n- High FPS capture for key moments\n\nStep 2: Object Detection\n- Pre-trained computer vision models\n- YOLOv8 or Google's AutoML Vision\n- Detect baseball, players, equipment\n\nStep 3: Track Motion\n- Object tracking algorithms\n- DeepSORT or Kalman Filter\n- Track baseball trajectory\n\nStep 4: Analyze Events\n- Machine learning models\n- TensorFlow/PyTorch implementation\n- Vertex AI custom models",
    },
    ProjectSection {
        id: "development",
        title: "5. Application Development",
        content: "Frontend:\n- User-friendly dashboard\n- Video upload functionality\n- Metrics visualization\n\nBackend:\n- API development\n- Cloud Run hosting\n- BigQuery integration",
    },
    ProjectSection {
        id: "testing",
        title: "6. Testing and Deployment",
        content: "Testing:\n- Multiple archival video testing\n- Model fine-tuning\n- Edge case handling\n- Performance optimization\n\nDeployment:\n- Cloud Run/App Engine hosting\n- CI/CD pipeline implementation\n- Monitoring and logging",
    },
    ProjectSection {
        id: "submission",
        title: "7. Submission Components",
        content: "A. Hosted Project:\n- Live URL\n- Real-time metric extraction\n- User interface\n\nB. Project Description:\n- Features and functionality\n- Technology stack\n- Data sources\n- Findings and learnings\n\nC. Open Source Repository:\n- MIT License\n- Detailed README\n- Installation guide\n- Contribution guidelines",
    },
    ProjectSection {
        id: "final",
        title: "8. Final Touches",
        content: "Documentation:\n- User instructions\n- System architecture diagrams\n- Model explanations\n- API documentation\n\nPresentation:\n- Demo video\n- Performance metrics\n- Future improvements",
    },
];

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Rishi Das",
        role: "Lead Developer",
        bio: "Specializes in computer vision and machine learning, with expertise in baseball analytics.",
        github: Some("https://github.com"),
        linkedin: Some("https://linkedin.com"),
        email: Some("john@example.com"),
    },
    TeamMember {
        name: "Anshuman Panda",
        role: "ML Developer",
        bio: "Expert in statistical analysis and machine learning model development.",
        github: Some("https://github.com"),
        linkedin: Some("https://linkedin.com"),
        email: Some("jane@example.com"),
    },
    TeamMember {
        name: "Dinesh Jang",
        role: "Full Stack Developer",
        bio: "Specializes in creating intuitive user interfaces and data visualizations.",
        github: Some("https://github.com"),
        linkedin: Some("https://linkedin.com"),
        email: Some("mike@example.com"),
    },
];
