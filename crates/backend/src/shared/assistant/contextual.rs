/// Example questions offered for the page at `pathname`. The first matching
/// section wins; anything else gets the overview questions.
pub fn get_contextual_questions(pathname: &str) -> &'static [&'static str] {
    const SECTIONS: &[(&str, &[&str])] = &[
        (
            "/dashboard/analytics",
            &[
                "Why is revenue ₹45.2L?",
                "Which category is performing best?",
                "How is my team's productivity?",
            ],
        ),
        (
            "/dashboard/customers",
            &[
                "Why do I have 156 customers?",
                "Which customers are high-value?",
                "How can I reduce churn?",
            ],
        ),
        (
            "/dashboard/payments",
            &[
                "Why is collection rate 78%?",
                "Which payments are most overdue?",
                "How to improve cash flow?",
            ],
        ),
        (
            "/dashboard/activities",
            &[
                "Why only 38 activities today?",
                "Who is the top performing rep?",
                "How to increase team productivity?",
            ],
        ),
        (
            "/dashboard/catalog",
            &[
                "Which products sell the most?",
                "What items are low on stock?",
                "Should I add new products?",
            ],
        ),
        (
            "/dashboard/schemes",
            &[
                "Which scheme is most effective?",
                "How to create better promotions?",
                "Are schemes profitable?",
            ],
        ),
    ];

    SECTIONS
        .iter()
        .find(|(section, _)| pathname.contains(section))
        .map(|&(_, questions)| questions)
        .unwrap_or(&[
            "Why is outstanding ₹27.5L?",
            "How can I improve collection rate?",
            "Which customers should I prioritize?",
            "What's driving the 68% conversion rate?",
        ])
}
