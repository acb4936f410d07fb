//! Default content templates for each block variant.

use crate::block::BlockContent;
use crate::block_type::BlockType;
use crate::content::*;

fn s(value: &str) -> String {
    value.to_string()
}

fn link(text: &str) -> Link {
    Link {
        text: s(text),
        url: s("#"),
    }
}

/// Fresh copy of the default content for a variant
pub fn default_content(block_type: BlockType) -> BlockContent {
    match block_type {
        BlockType::Header => BlockContent::Header(HeaderContent {
            logo_text: s("Zenith"),
            nav_links: vec![link("Features"), link("Pricing"), link("About")],
            button_text: s("Sign Up"),
            button_url: s("#"),
            show_theme_toggle: true,
        }),
        BlockType::Hero => BlockContent::Hero(HeroContent {
            heading: s("Create with confidence."),
            subheading: s(
                "A powerful builder for modern websites. Drag, drop, and deploy in minutes.",
            ),
            button_text: s("Get Started"),
            button_url: s("#"),
            show_button: true,
            alignment: Align::Center,
        }),
        BlockType::Features => BlockContent::Features(FeaturesContent {
            heading: s("Why choose us"),
            items: vec![
                FeatureItem {
                    title: s("Fast Performance"),
                    description: s("Optimized for speed and efficiency."),
                    icon: s("zap"),
                },
                FeatureItem {
                    title: s("Responsive Design"),
                    description: s("Looks great on every device automatically."),
                    icon: s("smartphone"),
                },
                FeatureItem {
                    title: s("Secure & Reliable"),
                    description: s("Built with security best practices in mind."),
                    icon: s("shield"),
                },
            ],
        }),
        BlockType::Testimonials => BlockContent::Testimonials(TestimonialsContent {
            heading: s("Loved by thousands"),
            items: vec![
                Testimonial {
                    quote: s("This builder changed how I work. Simply amazing!"),
                    author: s("Sarah J."),
                    role: s("Designer"),
                },
                Testimonial {
                    quote: s("The flexibility is unmatched. Highly recommended."),
                    author: s("Mike T."),
                    role: s("Developer"),
                },
                Testimonial {
                    quote: s("A game changer for our marketing team."),
                    author: s("Emily R."),
                    role: s("CMO"),
                },
            ],
        }),
        BlockType::Video => BlockContent::Video(VideoContent {
            heading: s("Watch it in action"),
            video_url: s("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            description: s("See how our platform can transform your workflow."),
        }),
        BlockType::Cta => BlockContent::Cta(CtaContent {
            heading: s("Ready to dive in?"),
            subheading: s("Join the community and start building today."),
            button_text: s("Start Free Trial"),
        }),
        BlockType::Contact => BlockContent::Contact(ContactContent {
            heading: s("Get in touch"),
            subheading: s("We\u{2019}d love to hear from you. Fill out the form below."),
            button_text: s("Send Message"),
            email_placeholder: s("you@example.com"),
            message_placeholder: s("Your message..."),
        }),
        BlockType::Pricing => BlockContent::Pricing(PricingContent {
            heading: s("Simple Pricing"),
            plans: vec![
                Plan {
                    name: s("Starter"),
                    price: s("$0"),
                    features: vec![s("1 Project"), s("Basic Analytics"), s("Community Support")],
                },
                Plan {
                    name: s("Pro"),
                    price: s("$29"),
                    features: vec![
                        s("Unlimited Projects"),
                        s("Pro Analytics"),
                        s("Priority Support"),
                    ],
                },
                Plan {
                    name: s("Enterprise"),
                    price: s("$99"),
                    features: vec![
                        s("Custom Solutions"),
                        s("Dedicated Manager"),
                        s("24/7 Support"),
                    ],
                },
            ],
        }),
        BlockType::Faq => BlockContent::Faq(FaqContent {
            heading: s("Frequently Asked Questions"),
            items: vec![
                FaqItem {
                    question: s("Is there a free trial?"),
                    answer: s("Yes, we offer a 14-day free trial on all plans."),
                },
                FaqItem {
                    question: s("Can I cancel anytime?"),
                    answer: s("Absolutely. There are no lock-in contracts."),
                },
                FaqItem {
                    question: s("Do you offer support?"),
                    answer: s("Yes, our team is available 24/7 to help you."),
                },
            ],
        }),
        BlockType::Footer => BlockContent::Footer(FooterContent {
            copyright: s("\u{a9} 2024 Zenith Builder."),
            links: vec![link("Privacy Policy"), link("Terms of Service"), link("Contact")],
        }),
        BlockType::Gallery => BlockContent::Gallery(GalleryContent {
            heading: s("Our Work"),
            images: (1..=4)
                .map(|i| format!("https://picsum.photos/400/300?random={}", i))
                .collect(),
        }),
        BlockType::Team => BlockContent::Team(TeamContent {
            heading: s("Meet the Team"),
            members: [
                ("Alex Doe", "CEO", "a"),
                ("Sam Smith", "CTO", "b"),
                ("Jordan Lee", "Designer", "c"),
                ("Casey West", "Developer", "d"),
            ]
            .iter()
            .map(|(name, role, avatar)| Member {
                name: s(name),
                role: s(role),
                image: format!("https://i.pravatar.cc/150?u={}", avatar),
            })
            .collect(),
        }),
        BlockType::Blog => BlockContent::Blog(BlogContent {
            heading: s("Latest News"),
            posts: vec![
                Post {
                    title: s("The Future of Web Design"),
                    excerpt: s("Exploring the trends that will shape 2025."),
                },
                Post {
                    title: s("Optimizing for Performance"),
                    excerpt: s("Tips and tricks to make your site fly."),
                },
                Post {
                    title: s("Design Systems 101"),
                    excerpt: s("How to maintain consistency at scale."),
                },
            ],
        }),
        BlockType::Newsletter => BlockContent::Newsletter(NewsletterContent {
            heading: s("Stay Updated"),
            subheading: s("Subscribe to our newsletter for the latest tips and news."),
            placeholder: s("Enter your email"),
            button_text: s("Subscribe"),
        }),
        BlockType::ImageText => BlockContent::ImageText(ImageTextContent {
            heading: s("Visual Impact"),
            text: s(
                "Combine powerful imagery with compelling copy to engage your audience effectively.",
            ),
            image_src: s("https://picsum.photos/800/600"),
            image_position: ImagePosition::Right,
            button_text: s("Learn More"),
        }),
    }
}
