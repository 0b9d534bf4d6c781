//! Static Pages
//!
//! Copy for the informational pages: user guides, support contacts, issue
//! reporting and the privacy policy. The front-end renders these verbatim.

pub const SITE_URL: &str = "https://bizzap.app";
pub const LOGO_URL: &str = "https://i.ibb.co/kgQPFY8D/Bizzap-8.png";
pub const WHATSAPP_GROUP_URL: &str = "https://chat.whatsapp.com/F5j2hxwXxpDE1BeMLKG8lZ?mode=ems_wa_t";
pub const PLAY_STORE_URL: &str = "https://play.google.com/apps/internaltest/4701095438570291551";

pub const TAGLINE: &str = "Sourcing Made Social";
pub const COPYRIGHT: &str = "© 2026 Bizzap. All rights reserved.";

/// One numbered step of a guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Label/value pairs of the example box
    pub example: &'static [(&'static str, &'static str)],
    pub tips: &'static [&'static str],
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub warning: Option<&'static str>,
    /// Items removed with the account
    pub deleted_items: &'static [&'static str],
    pub steps: &'static [GuideStep],
    pub troubleshooting: &'static [Faq],
    pub alternatives: &'static [&'static str],
}

const EXAMPLE_PHONE: &[(&str, &str)] = &[("Country Code", "+91"), ("Phone Number", "9876543210")];

pub const LOGIN_GUIDE: Guide = Guide {
    title: "How to Login to Bizzap",
    subtitle: "Bizzap uses a secure OTP-based login system. Follow these simple steps to access your account.",
    warning: None,
    deleted_items: &[],
    steps: &[
        GuideStep {
            title: "Enter Your Phone Number",
            description: "Open the Bizzap app and you'll see the login screen. Enter your registered phone number with the correct country code.",
            example: EXAMPLE_PHONE,
            tips: &[
                "Make sure to include your country code (+91 for India, +1 for USA, etc.)",
                "Enter only digits without spaces or special characters",
                "Use the phone number you registered with",
            ],
            note: None,
        },
        GuideStep {
            title: "Request OTP",
            description: "After entering your phone number, tap on the \"Send OTP\" button. Within seconds, you'll receive a 6-digit verification code via SMS.",
            example: &[],
            tips: &[],
            note: Some("The OTP is valid for 10 minutes. Make sure to enter it before it expires."),
        },
        GuideStep {
            title: "Enter the OTP",
            description: "Check your SMS messages for the 6-digit OTP code sent from Bizzap. Enter this code in the OTP input field on the app.",
            example: &[("Example OTP", "1 2 3 4 5 6")],
            tips: &[
                "Enter all 6 digits carefully",
                "Don't share your OTP with anyone",
                "If you don't receive the OTP, you can request a new one",
            ],
            note: None,
        },
        GuideStep {
            title: "Login Successful",
            description: "Once you enter the correct OTP, you'll be automatically logged into your Bizzap account. You can now access all features including posting requirements, browsing products, and connecting with businesses.",
            example: &[],
            tips: &[],
            note: Some("You're all set! Welcome to Bizzap."),
        },
    ],
    troubleshooting: &[
        Faq {
            question: "Didn't receive OTP?",
            answers: &[
                "Check your phone's signal strength",
                "Wait 2-3 minutes, sometimes SMS can be delayed",
                "Request a new OTP using the \"Resend OTP\" option",
                "Ensure your phone number is correct",
            ],
        },
        Faq {
            question: "OTP not working?",
            answers: &[
                "Make sure you entered all 6 digits correctly",
                "Check if the OTP has expired (valid for 10 minutes)",
                "Request a fresh OTP and try again",
            ],
        },
    ],
    alternatives: &[],
};

pub const DELETE_GUIDE: Guide = Guide {
    title: "How to Delete Your Bizzap Account",
    subtitle: "You can permanently delete your account and all associated data at any time. This action is irreversible.",
    warning: Some("Deleting your account is permanent and cannot be undone. All your data will be immediately and permanently removed from our servers."),
    deleted_items: &[
        "Your profile and business information",
        "All posted requirements and listings",
        "Product catalogue and inventory",
        "Premium subscription benefits",
        "All chat history and connections",
        "Saved preferences and settings",
        "Transaction history and analytics",
        "Company verified badge status",
    ],
    steps: &[
        GuideStep {
            title: "Navigate to Account Settings",
            description: "Open the Bizzap app and go to your Profile → Settings → Account Management → Select \"Delete Account\" option.",
            example: &[],
            tips: &[],
            note: None,
        },
        GuideStep {
            title: "Verify Your Phone Number",
            description: "For security purposes, you'll need to verify your identity. Enter your registered phone number to receive an OTP verification code.",
            example: EXAMPLE_PHONE,
            tips: &[],
            note: None,
        },
        GuideStep {
            title: "Enter Verification OTP",
            description: "You'll receive a 6-digit OTP code via SMS. Enter this code to verify that you are the account owner and authorize the deletion.",
            example: &[],
            tips: &[],
            note: Some("Security Check: This OTP ensures only you can delete your account. Never share this code with anyone."),
        },
        GuideStep {
            title: "Final Confirmation",
            description: "After OTP verification, you'll see a final confirmation screen showing everything that will be deleted. Review this carefully before proceeding. Tap \"Yes, Delete My Account\" to proceed with permanent deletion.",
            example: &[],
            tips: &[],
            note: None,
        },
        GuideStep {
            title: "Account Deleted Instantly",
            description: "Your account and all associated data will be immediately and permanently deleted from our servers. You'll be logged out automatically and can no longer access Bizzap with this phone number.",
            example: &[],
            tips: &[],
            note: Some("If you wish to use Bizzap again in the future, you'll need to create a new account from scratch."),
        },
    ],
    troubleshooting: &[],
    alternatives: &[
        "Temporarily deactivate your account (coming soon)",
        "Clear your data without deleting the account",
        "Contact support at support@bizzap.app for assistance",
    ],
};

/// Support contact details
pub mod support {
    pub const ADMIN_EMAIL: &str = "admin@bizzap.app";
    pub const SUPPORT_EMAIL: &str = "support@bizzap.app";
    pub const PHONE_DISPLAY: &str = "+91 90033 88830";
    pub const PHONE_TEL: &str = "tel:+919003388830";
    pub const HOURS: &str = "10:00 AM - 6:00 PM IST";
    pub const DAYS: &str = "Mon-Sat";
    pub const OFFICE: [&str; 3] = ["Bizzap Headquarters", "Tiruppur, Tamil Nadu", "India"];
    pub const STANDARD_RESPONSE: &str = "24 - 48 Hours";
    pub const URGENT_RESPONSE: &str = "Call Support";

    /// General instructions as (topic, answer)
    pub const INSTRUCTIONS: [(&str, &str); 3] = [
        (
            "Login Issues",
            "Ensure you are using the correct country code (+91 for India) and that your mobile network is active to receive the OTP. If issues persist, wait 10 minutes and try again.",
        ),
        (
            "Verification Badge",
            "To get the \"Verified Business\" badge, upload your GST certificate or business registration document in the profile settings. Verification usually takes 24-48 hours.",
        ),
        (
            "Account Deletion",
            "You can request account deletion directly within the app under Settings > Privacy. Alternatively, email us with the subject \"Delete Account\" from your registered email.",
        ),
    ];

    pub fn mailto(address: &str) -> String {
        format!("mailto:{}", address)
    }
}

/// Issue reporting page
pub mod report {
    use super::support::SUPPORT_EMAIL;

    pub const SUBJECT: &str = "Report Issue: [Insert Lead/User Name]";

    pub const BODY: &str = "Please provide the following details to help us investigate:

1. Issue Type: (e.g., Fraud, Harassment, Fake Lead)
2. Lead/User Name:
3. Date of Incident:
4. Description of Issue:

[Please attach any screenshots or proof here]
";

    /// What a report should include, as (heading, detail)
    pub const GUIDELINES: [(&str, &str); 3] = [
        ("User Details", "The name or profile link of the person/business you are reporting."),
        ("Description", "A clear explanation of what happened and when."),
        ("Evidence", "Screenshots of chats, leads, or payment proof if applicable."),
    ];

    pub const COMMITMENTS: [(&str, &str); 3] = [
        ("Confidentiality", "Your identity is kept anonymous. We never share reporter details with the accused party."),
        ("Review Process", "Our team reviews reports within 24 hours and takes appropriate action."),
        ("Zero Tolerance", "We immediately ban accounts found engaging in fraud, hate speech, or illegal activities."),
    ];

    /// `mailto:` link with the report template pre-filled
    pub fn mailto() -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            SUPPORT_EMAIL,
            urlencoding::encode(SUBJECT),
            urlencoding::encode(BODY)
        )
    }
}

/// A block inside a privacy policy section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyBlock {
    Heading(&'static str),
    Text(&'static str),
    Bullets(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub title: &'static str,
    pub blocks: &'static [PolicyBlock],
}

pub mod privacy {
    use super::PolicyBlock::{Bullets, Heading, Text};
    use super::PolicySection;

    pub const EFFECTIVE_DATE: &str = "21-01-2026";
    pub const DEVELOPER: &str = "Bizzap";
    pub const CONTACT: &str = "admin@bizzap.app";

    pub const INTRO: [&str; 2] = [
        "Bizzap is a business networking platform that helps companies connect, share updates, and discover opportunities. This Privacy Policy explains how we collect, use, and protect your information when you use the Bizzap mobile application.",
        "By installing or using the app, you agree to the terms described below.",
    ];

    pub const SECTIONS: &[PolicySection] = &[
        PolicySection {
            title: "1. Information We Collect",
            blocks: &[
                Heading("1.1 Information You Provide"),
                Text("We collect the information you enter while creating or updating your profile:"),
                Bullets(&["Full name", "Phone number", "Email address", "Profile photo", "Designation"]),
                Text("We also collect company information such as:"),
                Bullets(&[
                    "Company name",
                    "Company address",
                    "GST number or business verification documents",
                    "Company logo",
                    "Factory or infrastructure images",
                    "Certifications or sustainability documents (optional)",
                ]),
                Text("You also provide information when you post updates, add products, create leads, or message other users."),
                Heading("1.2 Automatically Collected Information"),
                Text("When you use Bizzap, we automatically collect:"),
                Bullets(&[
                    "Device type and operating system",
                    "IP address",
                    "App version",
                    "Usage activity such as screens viewed, interactions, searches",
                    "Log data and crash reports",
                ]),
                Heading("1.3 Permissions Used"),
                Text("Bizzap may request access to:"),
                Bullets(&[
                    "Camera (upload photos)",
                    "Photos and media (select images for profile, posts, company details)",
                    "Location (for leads and requirements)",
                    "Notifications (lead alerts, post, news, messages)",
                    "Phone number (for verification)",
                ]),
                Text("You can manage these permissions from your device settings."),
            ],
        },
        PolicySection {
            title: "2. How We Use Your Information",
            blocks: &[
                Text("We use your information to:"),
                Bullets(&[
                    "Create and manage your account",
                    "Verify your business identity",
                    "Help you connect with other businesses",
                    "Show personalized feeds, leads, and recommendations",
                    "Improve app features, stability, and user experience",
                    "Provide customer support",
                    "Detect fraud, spam, and security issues",
                ]),
                Text("We do not sell your personal data."),
            ],
        },
        PolicySection {
            title: "3. How We Share Information",
            blocks: &[
                Text("We may share your information only in the following cases:"),
                Heading("3.1 Public or Shared Content"),
                Text("Your business profile, posts, comments, product listings, and leads may be visible to other users inside Bizzap."),
                Heading("3.2 Service Providers"),
                Text("We may share limited information with trusted partners that help with:"),
                Bullets(&["Cloud hosting", "Analytics", "Authentication", "Data storage", "Verification"]),
                Text("These providers follow strict confidentiality and security requirements."),
                Heading("3.3 Legal Requirements"),
                Text("We may share information if required by law, court order, or government authority."),
                Text("We never share your data for external advertising."),
            ],
        },
        PolicySection {
            title: "4. Data Storage and Security",
            blocks: &[
                Bullets(&[
                    "Your data is stored on secure servers with encryption and access control",
                    "Only authorized personnel can access sensitive data",
                    "We monitor systems to prevent fraud or abuse",
                ]),
                Text("Although we try to protect your data, no system is completely secure."),
            ],
        },
        PolicySection {
            title: "5. Your Rights",
            blocks: &[
                Text("You may request at any time to:"),
                Bullets(&[
                    "Access your personal information",
                    "Update or correct details",
                    "Delete your account",
                    "Withdraw optional permissions",
                    "Ask for clarification on how your data is used",
                ]),
                Text("Contact us at admin@bizzap.app to make a request."),
            ],
        },
        PolicySection {
            title: "6. Data Retention",
            blocks: &[
                Text("We keep your data as long as your account is active."),
                Text("When you delete your account, your information is removed within a reasonable time except where legally required."),
            ],
        },
        PolicySection {
            title: "7. Children's Privacy",
            blocks: &[
                Text("Bizzap is built for business users only."),
                Text("We do not allow individuals under 18 years to create an account."),
            ],
        },
        PolicySection {
            title: "8. Links to Other Sites",
            blocks: &[
                Text("Bizzap may contain links to external websites."),
                Text("We are not responsible for their content or privacy practices."),
            ],
        },
        PolicySection {
            title: "9. Changes to This Policy",
            blocks: &[
                Text("We may update this Privacy Policy from time to time."),
                Text("We will upload the latest version inside the app and on our website."),
            ],
        },
        PolicySection {
            title: "10. Contact Us",
            blocks: &[
                Text("For any questions or concerns:"),
                Bullets(&["Email: admin@bizzap.app", "Company: Bizzap", "Location: Tiruppur, India"]),
            ],
        },
    ];
}

/// Landing page and OTP login copy
pub mod landing {
    pub const HERO: &str = "Join the waitlist and get 3 months premium subscription for free";

    pub const PREMIUM_BENEFITS: [&str; 5] = [
        "Post Requirements",
        "Get Free Leads",
        "Company Verified Badge",
        "Product Catalogue",
        "AI Business Assistant",
    ];

    pub const COUNTRY_HINT: &str = "Enter your country code (e.g., +91 for India, +1 for USA, +44 for UK)";
    pub const SUCCESS_TITLE: &str = "Welcome aboard!";
    pub const SUCCESS_MESSAGE: &str = "You're now on the waitlist. We'll notify you when Bizzap launches!";
    pub const TRUSTED_BY: &str = "Trusted by 100+ businesses already";

    pub const LOGIN_TITLE: &str = "Welcome to Bizzap";
    pub const LOGIN_SUBTITLE: &str = "Enter your phone number to continue";
    pub const LOGIN_HINT: &str = "Include country code (e.g., +91 for India)";
    pub const TERMS_PLACEHOLDER: &str = "Terms and Conditions will be displayed here";
    pub const OTP_SENT_TITLE: &str = "OTP Sent Successfully!";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_shapes() {
        assert_eq!(LOGIN_GUIDE.steps.len(), 4);
        assert_eq!(LOGIN_GUIDE.troubleshooting.len(), 2);
        assert_eq!(DELETE_GUIDE.steps.len(), 5);
        assert_eq!(DELETE_GUIDE.deleted_items.len(), 8);
        assert!(DELETE_GUIDE.warning.is_some());
        assert_eq!(landing::PREMIUM_BENEFITS.len(), 5);
    }

    #[test]
    fn test_report_mailto_is_encoded() {
        let link = report::mailto();
        assert!(link.starts_with("mailto:support@bizzap.app?subject=Report%20Issue%3A%20%5BInsert%20Lead%2FUser%20Name%5D&body="));
        assert!(!link.contains('\n'));
        assert!(!link.contains(' '));

        let body = link.split("&body=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(body).unwrap(), report::BODY);
    }

    #[test]
    fn test_privacy_sections_numbered() {
        assert_eq!(privacy::SECTIONS.len(), 10);
        for (i, section) in privacy::SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}.", i + 1)));
        }
    }
}
