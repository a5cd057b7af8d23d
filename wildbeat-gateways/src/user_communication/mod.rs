use askama::Template;
use wildbeat_entities::{booking::*, donation::*, email::*, review::*, tour::*};

const SIGNATURE: &str = "Your Wildbeat Safari team";

#[derive(Template)]
#[template(
    ext = "txt",
    source = "Hello {{ name }},

thank you for booking with Wildbeat Safari!

Tour:     {{ tour }}
Date:     {{ date }}
Guests:   {{ guests }}
{% if let Some(price) = total_price %}Total:    {{ price }} USD
{% endif %}Status:   {{ status }}

We will contact you shortly to confirm the details.

{{ signature }}"
)]
struct BookingReceivedTemplate<'a> {
    name: &'a str,
    tour: &'a str,
    date: String,
    guests: u32,
    total_price: Option<String>,
    status: &'a str,
    signature: &'a str,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "New booking #{{ id }}

Tour:     {{ tour }}
Date:     {{ date }}
Guests:   {{ guests }}
Name:     {{ name }}
E-mail:   {{ email }}
{% if let Some(phone) = phone %}Phone:    {{ phone }}
{% endif %}{% if let Some(requests) = special_requests %}
Special requests:
{{ requests }}
{% endif %}"
)]
struct NewBookingTemplate<'a> {
    id: i64,
    tour: &'a str,
    date: String,
    guests: u32,
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    special_requests: Option<&'a str>,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "{{ name }} ({{ email }}) wrote a review with {{ rating }} of 5 stars:

{{ text }}
{% if let Some(url) = approval_url %}
The review is not published yet. Open the following link to approve it:

{{ url }}
{% endif %}"
)]
struct ReviewSubmittedTemplate<'a> {
    name: &'a str,
    email: &'a str,
    rating: u8,
    text: &'a str,
    approval_url: Option<&'a str>,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "Dear {{ name }},

thank you so much for your donation of {{ amount }} USD.
Your support helps us protect wildlife and the communities around it.

{{ signature }}"
)]
struct DonationThanksTemplate<'a> {
    name: &'a str,
    amount: String,
    signature: &'a str,
}

fn tour_title(tour: Option<&Tour>) -> &str {
    tour.map(|t| t.title.as_str()).unwrap_or("Custom safari")
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Confirmation for the guest who booked a tour.
pub fn booking_received_email(
    booking: &Booking,
    tour: Option<&Tour>,
) -> askama::Result<EmailContent> {
    let tour = tour_title(tour);
    let subject = format!("Wildbeat Safari - booking received: {tour}");
    let body = BookingReceivedTemplate {
        name: &booking.name,
        tour,
        date: booking.date.to_string(),
        guests: booking.guests,
        total_price: booking.total_price.map(money),
        status: booking.status.as_str(),
        signature: SIGNATURE,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

/// Notification for the team about a new booking.
pub fn new_booking_email(booking: &Booking, tour: Option<&Tour>) -> askama::Result<EmailContent> {
    let tour = tour_title(tour);
    let subject = format!("New booking: {tour} on {}", booking.date);
    let body = NewBookingTemplate {
        id: booking.id,
        tour,
        date: booking.date.to_string(),
        guests: booking.guests,
        name: &booking.name,
        email: booking.email.as_str(),
        phone: booking.phone.as_deref(),
        special_requests: booking.special_requests.as_deref(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

pub fn review_submitted_email(
    review: &Review,
    approval_url: Option<&str>,
) -> askama::Result<EmailContent> {
    let subject = if approval_url.is_some() {
        format!("New review from {} awaits approval", review.name)
    } else {
        format!("New review from {}", review.name)
    };
    let body = ReviewSubmittedTemplate {
        name: &review.name,
        email: review.email.as_str(),
        rating: review.rating.value(),
        text: &review.review_text,
        approval_url,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

pub fn donation_thanks_email(donation: &Donation) -> askama::Result<EmailContent> {
    let subject = "Thank you for supporting Wildbeat Safari".to_owned();
    let body = DonationThanksTemplate {
        name: donation.name.as_deref().unwrap_or("friend"),
        amount: money(donation.amount),
        signature: SIGNATURE,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

/// Notification for the team about a received donation.
pub fn donation_received_email(donation: &Donation) -> EmailContent {
    let subject = format!("New donation: {} USD", money(donation.amount));
    let mut body = format!(
        "Amount:  {} USD\nMethod:  {}\nStatus:  {}\n",
        money(donation.amount),
        donation.payment_method,
        donation.status
    );
    if let Some(name) = &donation.name {
        body.push_str(&format!("Donor:   {name}\n"));
    }
    if let Some(email) = &donation.email {
        body.push_str(&format!("E-mail:  {email}\n"));
    }
    if let Some(message) = &donation.message {
        body.push_str(&format!("\n{message}\n"));
    }
    EmailContent { subject, body }
}
