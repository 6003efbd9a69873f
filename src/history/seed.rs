//! Sample call history

use crate::history::call::{Call, CallType};

const JANE_DOE_AVATAR: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuBCnRb2Mq5BI-x21XrehQHNqLBzJwdwCYtyy7kJy5BkfYFDa1EW43PklT_OJK7HM0Gruv575uvfn-1IG0oAvkcdVSPbDt6rzNNsU8GABjgzSAeBo-BOCjJ3EI3WgAbDWeUbhfIMc_1U8KyR568FKtPFJlF68UgCFfsCs0rx6utPJZiuliZ7QkHXQ2sesamk3ocREcr5bV6mMtLoYMzYf0ZOdXsCQhC1XV0_xW_5HF28e9960pgugEn-VHugF4PwkwhpiPvERDo46pE";
const MOM_AVATAR: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuB3gsq_YZcE76khx9qF8zkD1yUzkzbW9K_KTQ5mSxIiVcGBTHPezBJ9ppl65PPk9-8bKx5ZoIJD5qWDHalWDr0Klrb33pfyGycygxGJp4e6Zxjj4bYS-lrRSVD2RmdOoDH5_CNpPXCTIiaAwFGp7sU7Y5bb7W0p4OLPIx3mVAogkxORdQPPssXgyu5szxdbRWu0Hxl2UvECN9pQUoVkjHUn8sL5eIekXd-0lcCc1-UwgFGyj7fxWkcos9kzdqb0d0yqoaD-wx2_eVs";
const JOHN_SMITH_AVATAR: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuCWWGWzmwrnr0votvth7E8VpaN_dVKGJcxOtoOG0X_Y-FxmKRCeAPp5cbqrWDgV6a-CYsP6fCN_HKwmOmeItPI667XUjz5fEkCDrFdVTtYqL9wnvTJyHzeYjx1O-rofzXkAYwHoytVX9C1Pe30t2O7a_07G5eEnlwNbhR3R3Ckz7xyEKmS-bkLYKc0DlP028ji50jaf-FiUbyeKbUyQcXVkwNqJJ-SEAbBk-OtIRXdT2z7MhoMM6EJ7ZsnrNwNpJ0RCyz3jAGSLJTU";
const DAVID_BROWN_AVATAR: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuDnmTJAWmhFXUQdTjoqhXqp5iynF9OnLjujocW6gxp12AZwbYBFGvnifA9kS5pQ-TtcjSsVhXgoMQhlsuZCKhuyQqGSf4IKSqvwEmPwLSoPkDs5ffFWj1LYyE-HWG7Qpasyz1KfveJ2fcaKW_nmranY1yPBzfDlWGkyugHG4Su0-YSNrJaGjGlevulRAkG26syTn7VZ0iUhOXO0atlLMPo6Fnvj5eZ_Kv0cYw6cJjke4OyMP6nnmxXng8e_EGRybmdeirO30xtRUck";
const ALEX_JOHNSON_AVATAR: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200";
const SARAH_MILLER_AVATAR: &str = "https://images.unsplash.com/photo-1494790108755-2616b786d4d2?w=200";
const MICHAEL_CHEN_AVATAR: &str = "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=200";

/// Build the sample call history, newest first
pub fn seed_calls() -> Vec<Call> {
    vec![
        Call::new("Jane Doe", "10:30 AM", "Today", false, true, CallType::Voice, "5:32")
            .with_image_url(JANE_DOE_AVATAR),
        Call::new("Mom", "Yesterday, 9:15 PM", "Yesterday", true, false, CallType::Video, "Missed")
            .with_image_url(MOM_AVATAR),
        Call::new("John Smith", "Dec 12, 2:45 PM", "Dec 12", false, true, CallType::Voice, "12:45")
            .with_image_url(JOHN_SMITH_AVATAR),
        Call::new("Team Alpha", "Dec 11, 11:20 AM", "Dec 11", false, false, CallType::Group, "23:18")
            .as_group()
            .with_initials("TA"),
        Call::new("David Brown", "Dec 10, 4:30 PM", "Dec 10", true, false, CallType::Voice, "Missed")
            .with_image_url(DAVID_BROWN_AVATAR),
        Call::new("Alex Johnson", "Dec 9, 3:15 PM", "Dec 9", false, true, CallType::Video, "7:22")
            .with_image_url(ALEX_JOHNSON_AVATAR),
        Call::new("Sarah Miller", "Dec 8, 10:45 AM", "Dec 8", true, false, CallType::Voice, "Missed")
            .with_image_url(SARAH_MILLER_AVATAR),
        Call::new("Michael Chen", "Dec 7, 5:20 PM", "Dec 7", false, true, CallType::Video, "15:30")
            .with_image_url(MICHAEL_CHEN_AVATAR),
    ]
}

/// Missed entries of `calls`, in their original order
pub fn missed_subset(calls: &[Call]) -> Vec<Call> {
    calls.iter().filter(|call| call.is_missed()).cloned().collect()
}
