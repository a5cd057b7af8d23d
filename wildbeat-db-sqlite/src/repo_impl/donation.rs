use super::*;

impl_repo! {
    DonationRepo {
        read {
            fn get_donation(&self, id: Id) -> Result<Donation>;
            fn get_donation_by_transaction_id(&self, transaction_id: &str) -> Result<Donation>;
            fn all_donations_newest_first(&self) -> Result<Vec<Donation>>;
            fn completed_donations(&self) -> Result<Vec<Donation>>;
        }
        write {
            fn create_donation(&self, donation: &NewDonation) -> Result<Id>;
            fn update_donation_status(&self, id: Id, status: DonationStatus) -> Result<()>;
        }
    }
}

fn create_donation(conn: &mut SqliteConnection, donation: &NewDonation) -> Result<Id> {
    let NewDonation {
        donation_type_id,
        name,
        email,
        amount,
        payment_method,
        transaction_id,
        status,
        message,
    } = donation;
    let model = models::NewDonation {
        donation_type_id: *donation_type_id,
        name: name.as_deref(),
        email: email.as_deref(),
        amount: *amount,
        payment_method,
        transaction_id: transaction_id.as_deref(),
        status: status.as_str(),
        message: message.as_deref(),
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::donations::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn get_donation(conn: &mut SqliteConnection, id: Id) -> Result<Donation> {
    use schema::donations::dsl;
    dsl::donations
        .filter(dsl::id.eq(id))
        .first::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn get_donation_by_transaction_id(
    conn: &mut SqliteConnection,
    transaction_id: &str,
) -> Result<Donation> {
    use schema::donations::dsl;
    dsl::donations
        .filter(dsl::transaction_id.eq(transaction_id))
        .first::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn update_donation_status(
    conn: &mut SqliteConnection,
    id: Id,
    status: DonationStatus,
) -> Result<()> {
    use schema::donations::dsl;
    let count = diesel::update(dsl::donations.filter(dsl::id.eq(id)))
        .set(dsl::status.eq(status.as_str()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn all_donations_newest_first(conn: &mut SqliteConnection) -> Result<Vec<Donation>> {
    use schema::donations::dsl;
    dsl::donations
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn completed_donations(conn: &mut SqliteConnection) -> Result<Vec<Donation>> {
    use schema::donations::dsl;
    dsl::donations
        .filter(dsl::status.eq(DonationStatus::Completed.as_str()))
        .order_by(dsl::id)
        .load::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}
