use std::cell::{Cell, RefCell};

use crate::{entities::*, repositories::*};

type RepoResult<T> = std::result::Result<T, Error>;

#[derive(Default)]
pub struct MockDb {
    next_id: Cell<Id>,
    pub users: RefCell<Vec<User>>,
    pub sessions: RefCell<Vec<Session>>,
    pub tours: RefCell<Vec<Tour>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub reviews: RefCell<Vec<Review>>,
    pub gallery: RefCell<Vec<GalleryImage>>,
    pub donation_types: RefCell<Vec<DonationType>>,
    pub donations: RefCell<Vec<Donation>>,
    pub support_settings: RefCell<SupportSettings>,
    pub support_causes: RefCell<Vec<SupportCause>>,
    pub payment_methods: RefCell<Vec<PaymentMethod>>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

fn get<T: Clone>(objects: &[T], pred: impl Fn(&T) -> bool) -> RepoResult<T> {
    objects.iter().find(|x| pred(x)).cloned().ok_or(Error::NotFound)
}

fn modify<T>(objects: &mut [T], pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> RepoResult<()> {
    let x = objects.iter_mut().find(|x| pred(x)).ok_or(Error::NotFound)?;
    f(x);
    Ok(())
}

fn newest_first<T>(mut objects: Vec<T>, created_at: impl Fn(&T) -> (Timestamp, Id)) -> Vec<T> {
    objects.sort_by_key(|x| std::cmp::Reverse(created_at(x)));
    objects
}

impl UserRepo for MockDb {
    fn create_user(&self, u: &NewUserAccount) -> RepoResult<Id> {
        if self.users.borrow().iter().any(|x| x.email == u.email) {
            return Err(Error::AlreadyExists);
        }
        let id = self.next_id();
        self.users.borrow_mut().push(User {
            id,
            email: u.email.clone(),
            name: u.name.clone(),
            password: u.password.clone(),
            role: u.role,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), |u| u.id == id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        get(&self.users.borrow(), |u| &u.email == email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        match self.get_user_by_email(email) {
            Ok(u) => Ok(Some(u)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl SessionRepo for MockDb {
    fn create_session(&self, s: &NewSession) -> RepoResult<Id> {
        if self.sessions.borrow().iter().any(|x| x.token == s.token) {
            return Err(Error::AlreadyExists);
        }
        let id = self.next_id();
        self.sessions.borrow_mut().push(Session {
            id,
            user_id: s.user_id,
            token: s.token,
            expires_at: s.expires_at,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_session_by_token(&self, token: &Nonce) -> RepoResult<Session> {
        get(&self.sessions.borrow(), |s| &s.token == token)
    }
    fn delete_session_by_token(&self, token: &Nonce) -> RepoResult<usize> {
        let mut sessions = self.sessions.borrow_mut();
        let len = sessions.len();
        sessions.retain(|s| &s.token != token);
        Ok(len - sessions.len())
    }
    fn delete_expired_sessions(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let mut sessions = self.sessions.borrow_mut();
        let len = sessions.len();
        sessions.retain(|s| s.expires_at >= expired_before);
        Ok(len - sessions.len())
    }
}

impl TourRepo for MockDb {
    fn create_tour(&self, t: &NewTour) -> RepoResult<Id> {
        let id = self.next_id();
        self.tours.borrow_mut().push(Tour {
            id,
            title: t.title.clone(),
            description: t.description.clone(),
            price: t.price,
            duration: t.duration.clone(),
            group_size: t.group_size.clone(),
            location: t.location.clone(),
            highlights: t.highlights.clone(),
            image_url: t.image_url.clone(),
            rating: t.rating,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_tour(&self, id: Id) -> RepoResult<Tour> {
        get(&self.tours.borrow(), |t| t.id == id)
    }
    fn all_tours(&self) -> RepoResult<Vec<Tour>> {
        Ok(self.tours.borrow().clone())
    }
    fn count_tours(&self) -> RepoResult<usize> {
        Ok(self.tours.borrow().len())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, b: &NewBooking) -> RepoResult<Id> {
        let id = self.next_id();
        self.bookings.borrow_mut().push(Booking {
            id,
            tour_id: b.tour_id,
            name: b.name.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            date: b.date,
            guests: b.guests,
            special_requests: b.special_requests.clone(),
            status: b.status,
            total_price: b.total_price,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_booking(&self, id: Id) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), |b| b.id == id)
    }
    fn update_booking_status(&self, id: Id, status: BookingStatus) -> RepoResult<()> {
        modify(&mut self.bookings.borrow_mut(), |b| b.id == id, |b| b.status = status)
    }
    fn all_bookings_newest_first(&self) -> RepoResult<Vec<Booking>> {
        Ok(newest_first(self.bookings.borrow().clone(), |b| (b.created_at, b.id)))
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, r: &NewReview) -> RepoResult<Id> {
        let id = self.next_id();
        self.reviews.borrow_mut().push(Review {
            id,
            tour_id: r.tour_id,
            name: r.name.clone(),
            email: r.email.clone(),
            rating: r.rating,
            review_text: r.review_text.clone(),
            approved: r.approved,
            approval_token: r.approval_token,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_review(&self, id: Id) -> RepoResult<Review> {
        get(&self.reviews.borrow(), |r| r.id == id)
    }
    fn get_review_by_approval_token(&self, token: &Nonce) -> RepoResult<Review> {
        get(&self.reviews.borrow(), |r| r.approval_token.as_ref() == Some(token))
    }
    fn approve_review(&self, id: Id) -> RepoResult<()> {
        modify(
            &mut self.reviews.borrow_mut(),
            |r| r.id == id,
            |r| {
                r.approved = true;
                r.approval_token = None;
            },
        )
    }
    fn approved_reviews_newest_first(&self) -> RepoResult<Vec<Review>> {
        let approved = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.approved)
            .cloned()
            .collect();
        Ok(newest_first(approved, |r| (r.created_at, r.id)))
    }
    fn count_reviews(&self) -> RepoResult<usize> {
        Ok(self.reviews.borrow().len())
    }
}

impl GalleryRepo for MockDb {
    fn create_gallery_image(&self, i: &NewGalleryImage) -> RepoResult<Id> {
        let id = self.next_id();
        self.gallery.borrow_mut().push(GalleryImage {
            id,
            title: i.title.clone(),
            image_url: i.image_url.clone(),
            category: i.category.clone(),
            alt_text: i.alt_text.clone(),
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn gallery_images_newest_first(&self, category: Option<&str>) -> RepoResult<Vec<GalleryImage>> {
        let images = self
            .gallery
            .borrow()
            .iter()
            .filter(|i| category.is_none() || i.category.as_deref() == category)
            .cloned()
            .collect();
        Ok(newest_first(images, |i| (i.created_at, i.id)))
    }
    fn count_gallery_images(&self) -> RepoResult<usize> {
        Ok(self.gallery.borrow().len())
    }
}

impl DonationTypeRepo for MockDb {
    fn create_donation_type(&self, t: &NewDonationType) -> RepoResult<Id> {
        let id = self.next_id();
        let now = Timestamp::now();
        self.donation_types.borrow_mut().push(DonationType {
            id,
            title: t.title.clone(),
            amount: t.amount,
            description: t.description.clone(),
            icon_color: t.icon_color.clone(),
            benefits: t.benefits.clone(),
            is_active: t.is_active,
            sort_order: t.sort_order,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }
    fn update_donation_type(&self, id: Id, t: &NewDonationType) -> RepoResult<()> {
        modify(
            &mut self.donation_types.borrow_mut(),
            |x| x.id == id,
            |x| {
                x.title = t.title.clone();
                x.amount = t.amount;
                x.description = t.description.clone();
                x.icon_color = t.icon_color.clone();
                x.benefits = t.benefits.clone();
                x.is_active = t.is_active;
                x.sort_order = t.sort_order;
                x.updated_at = Timestamp::now();
            },
        )
    }
    fn deactivate_donation_type(&self, id: Id) -> RepoResult<()> {
        modify(&mut self.donation_types.borrow_mut(), |x| x.id == id, |x| x.is_active = false)
    }
    fn get_donation_type(&self, id: Id) -> RepoResult<DonationType> {
        get(&self.donation_types.borrow(), |x| x.id == id)
    }
    fn all_donation_types(&self) -> RepoResult<Vec<DonationType>> {
        let mut types = self.donation_types.borrow().clone();
        types.sort_by_key(|t| (t.sort_order, t.id));
        Ok(types)
    }
    fn active_donation_types(&self) -> RepoResult<Vec<DonationType>> {
        Ok(self
            .all_donation_types()?
            .into_iter()
            .filter(|t| t.is_active)
            .collect())
    }
    fn count_donation_types(&self) -> RepoResult<usize> {
        Ok(self.donation_types.borrow().len())
    }
}

impl DonationRepo for MockDb {
    fn create_donation(&self, d: &NewDonation) -> RepoResult<Id> {
        if d.transaction_id.is_some()
            && self
                .donations
                .borrow()
                .iter()
                .any(|x| x.transaction_id == d.transaction_id)
        {
            return Err(Error::AlreadyExists);
        }
        let id = self.next_id();
        self.donations.borrow_mut().push(Donation {
            id,
            donation_type_id: d.donation_type_id,
            name: d.name.clone(),
            email: d.email.clone(),
            amount: d.amount,
            payment_method: d.payment_method.clone(),
            transaction_id: d.transaction_id.clone(),
            status: d.status,
            message: d.message.clone(),
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
    fn get_donation(&self, id: Id) -> RepoResult<Donation> {
        get(&self.donations.borrow(), |d| d.id == id)
    }
    fn get_donation_by_transaction_id(&self, transaction_id: &str) -> RepoResult<Donation> {
        get(&self.donations.borrow(), |d| {
            d.transaction_id.as_deref() == Some(transaction_id)
        })
    }
    fn update_donation_status(&self, id: Id, status: DonationStatus) -> RepoResult<()> {
        modify(&mut self.donations.borrow_mut(), |d| d.id == id, |d| d.status = status)
    }
    fn all_donations_newest_first(&self) -> RepoResult<Vec<Donation>> {
        Ok(newest_first(self.donations.borrow().clone(), |d| (d.created_at, d.id)))
    }
    fn completed_donations(&self) -> RepoResult<Vec<Donation>> {
        Ok(self
            .donations
            .borrow()
            .iter()
            .filter(|d| d.status == DonationStatus::Completed)
            .cloned()
            .collect())
    }
}

impl SupportRepo for MockDb {
    fn get_support_settings(&self) -> RepoResult<SupportSettings> {
        Ok(self.support_settings.borrow().clone())
    }
    fn replace_support_settings(&self, settings: &SupportSettings) -> RepoResult<()> {
        *self.support_settings.borrow_mut() = settings.clone();
        Ok(())
    }
    fn create_support_cause(&self, c: &NewSupportCause) -> RepoResult<Id> {
        let id = self.next_id();
        self.support_causes.borrow_mut().push(SupportCause {
            id,
            title: c.title.clone(),
            description: c.description.clone(),
            icon: c.icon.clone(),
            sort_order: c.sort_order,
            is_active: c.is_active,
        });
        Ok(id)
    }
    fn update_support_cause(&self, id: Id, c: &NewSupportCause) -> RepoResult<()> {
        modify(
            &mut self.support_causes.borrow_mut(),
            |x| x.id == id,
            |x| {
                x.title = c.title.clone();
                x.description = c.description.clone();
                x.icon = c.icon.clone();
                x.sort_order = c.sort_order;
                x.is_active = c.is_active;
            },
        )
    }
    fn deactivate_support_cause(&self, id: Id) -> RepoResult<()> {
        modify(&mut self.support_causes.borrow_mut(), |x| x.id == id, |x| x.is_active = false)
    }
    fn all_support_causes(&self) -> RepoResult<Vec<SupportCause>> {
        let mut causes = self.support_causes.borrow().clone();
        causes.sort_by_key(|c| (c.sort_order, c.id));
        Ok(causes)
    }
    fn active_support_causes(&self) -> RepoResult<Vec<SupportCause>> {
        Ok(self
            .all_support_causes()?
            .into_iter()
            .filter(|c| c.is_active)
            .collect())
    }
    fn create_payment_method(&self, m: &NewPaymentMethod) -> RepoResult<Id> {
        let id = self.next_id();
        self.payment_methods.borrow_mut().push(PaymentMethod {
            id,
            name: m.name.clone(),
            tagline: m.tagline.clone(),
            description: m.description.clone(),
            integration_key: m.integration_key.clone(),
            button_label: m.button_label.clone(),
            icon: m.icon.clone(),
            currency: m.currency.clone(),
            config: m.config.clone(),
            sort_order: m.sort_order,
            is_active: m.is_active,
        });
        Ok(id)
    }
    fn update_payment_method(&self, id: Id, m: &NewPaymentMethod) -> RepoResult<()> {
        modify(
            &mut self.payment_methods.borrow_mut(),
            |x| x.id == id,
            |x| {
                x.name = m.name.clone();
                x.tagline = m.tagline.clone();
                x.description = m.description.clone();
                x.integration_key = m.integration_key.clone();
                x.button_label = m.button_label.clone();
                x.icon = m.icon.clone();
                x.currency = m.currency.clone();
                x.config = m.config.clone();
                x.sort_order = m.sort_order;
                x.is_active = m.is_active;
            },
        )
    }
    fn deactivate_payment_method(&self, id: Id) -> RepoResult<()> {
        modify(&mut self.payment_methods.borrow_mut(), |x| x.id == id, |x| x.is_active = false)
    }
    fn get_payment_method(&self, id: Id) -> RepoResult<PaymentMethod> {
        get(&self.payment_methods.borrow(), |x| x.id == id)
    }
    fn all_payment_methods(&self) -> RepoResult<Vec<PaymentMethod>> {
        let mut methods = self.payment_methods.borrow().clone();
        methods.sort_by_key(|m| (m.sort_order, m.id));
        Ok(methods)
    }
    fn active_payment_methods(&self) -> RepoResult<Vec<PaymentMethod>> {
        Ok(self
            .all_payment_methods()?
            .into_iter()
            .filter(|m| m.is_active)
            .collect())
    }
}
