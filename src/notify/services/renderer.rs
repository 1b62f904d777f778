//! Template-backed rendering of notification emails.

use minijinja::{Environment, context};

use crate::directory::domain::EmailAddress;
use crate::notify::domain::EmailMessage;

/// Invitation email sent to the invitee with the accept link.
const INVITE_TEMPLATE: &str = "\
<p>Hello,</p>\n\
<p>You have been invited to join the group <b>{{ group_name }}</b>.</p>\n\
{% if group_description %}<p>Description: {{ group_description }}</p>\n{% endif %}\
<p>To accept, click here: <a href=\"{{ accept_link }}\">{{ accept_link }}</a></p>\n";

/// Acceptance notice sent to the group owner.
const ACCEPTANCE_TEMPLATE: &str = "\
<p>Hello {{ owner_name }},</p>\n\
<p><b>{{ invitee_email }}</b> has accepted your invitation to join \
<b>{{ group_name }}</b>.</p>\n";

/// Assignment notice sent to a task's assignee.
const ASSIGNMENT_TEMPLATE: &str = "\
<p>You have been assigned a task in the group <b>{{ group_name }}</b>.</p>\n\
{% if group_description %}<p>Group description: {{ group_description }}</p>\n{% endif %}\
<p>Task: <b>{{ task_title }}</b></p>\n\
{% if task_description %}<p>Description: {{ task_description }}</p>\n{% endif %}";

/// Renders notification emails from embedded templates.
///
/// Template names carry an `.html` suffix so the environment's default
/// auto-escaping applies to interpolated group and task fields.
#[derive(Debug, Clone)]
pub struct MailRenderer {
    env: Environment<'static>,
}

impl MailRenderer {
    /// Creates a renderer with all notification templates loaded.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("invite.html", INVITE_TEMPLATE)?;
        env.add_template("acceptance.html", ACCEPTANCE_TEMPLATE)?;
        env.add_template("assignment.html", ASSIGNMENT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the invitation email carrying the accept link.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn invitation_email(
        &self,
        to: &EmailAddress,
        group_name: &str,
        group_description: Option<&str>,
        accept_link: &str,
    ) -> Result<EmailMessage, minijinja::Error> {
        let subject = format!("You're invited to join group '{group_name}'");
        let html = self.env.get_template("invite.html")?.render(context! {
            group_name,
            group_description,
            accept_link,
        })?;
        Ok(EmailMessage::new(to.clone(), subject, html))
    }

    /// Renders the acceptance notice for the group owner.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn acceptance_email(
        &self,
        to: &EmailAddress,
        owner_name: &str,
        invitee_email: &EmailAddress,
        group_name: &str,
    ) -> Result<EmailMessage, minijinja::Error> {
        let subject = format!("{invitee_email} accepted your invitation to '{group_name}'");
        let html = self.env.get_template("acceptance.html")?.render(context! {
            owner_name,
            invitee_email => invitee_email.as_str(),
            group_name,
        })?;
        Ok(EmailMessage::new(to.clone(), subject, html))
    }

    /// Renders the assignment notice for a task's assignee.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn assignment_email(
        &self,
        to: &EmailAddress,
        group_name: &str,
        group_description: Option<&str>,
        task_title: &str,
        task_description: Option<&str>,
    ) -> Result<EmailMessage, minijinja::Error> {
        let subject = format!("New task in group '{group_name}': {task_title}");
        let html = self.env.get_template("assignment.html")?.render(context! {
            group_name,
            group_description,
            task_title,
            task_description,
        })?;
        Ok(EmailMessage::new(to.clone(), subject, html))
    }
}
