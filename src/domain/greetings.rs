//! Greeting templates. Pure functions from a recipient id to message text.

use crate::domain::{GreetingMessage, MilitaryStatus};

/// Empty direct message addressed to `slack_id`; text is filled in by a template.
pub fn base_user_message(slack_id: &str) -> GreetingMessage {
    GreetingMessage {
        recipient: slack_id.to_string(),
        text: String::new(),
    }
}

/// Greeting for members currently serving (active duty, guard, reserve).
pub fn identify_military_ad(slack_id: &str) -> String {
    format!(
        "Hi <@{slack_id}>! Thank you for your service. As someone currently serving, \
         you have access to the #military-active-duty channel where other service members \
         share advice on learning to code while in uniform, transition timelines and \
         SkillBridge opportunities. Say hello there whenever you're ready!"
    )
}

/// Greeting for military spouses.
pub fn identify_military_spouse(slack_id: &str) -> String {
    format!(
        "Hi <@{slack_id}>! Welcome, and thank you for everything you do as a military spouse. \
         Head over to #military-spouses to meet others navigating PCS moves and remote work \
         while building a career in tech. We're glad to have you here!"
    )
}

/// Build the greeting for `status`.
pub fn greeting_for(slack_id: &str, status: MilitaryStatus) -> GreetingMessage {
    let mut message = base_user_message(slack_id);
    message.text = match status {
        MilitaryStatus::Current => identify_military_ad(slack_id),
        MilitaryStatus::Spouse => identify_military_spouse(slack_id),
    };
    message
}
