///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        name -> Nullable<Text>,
        password -> Text,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    sessions (id) {
        id -> BigInt,
        user_id -> BigInt,
        token -> Text,
        expires_at -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(sessions -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Tours
///////////////////////////////////////////////////////////////////////

table! {
    tours (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        price -> Double,
        duration -> Nullable<Text>,
        group_size -> Nullable<Text>,
        location -> Nullable<Text>,
        highlights -> Text,
        image_url -> Nullable<Text>,
        rating -> Double,
        created_at -> BigInt,
    }
}

table! {
    bookings (id) {
        id -> BigInt,
        tour_id -> Nullable<BigInt>,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        date -> Text,
        guests -> Integer,
        special_requests -> Nullable<Text>,
        status -> Text,
        total_price -> Nullable<Double>,
        created_at -> BigInt,
    }
}

table! {
    reviews (id) {
        id -> BigInt,
        tour_id -> Nullable<BigInt>,
        name -> Text,
        email -> Text,
        rating -> SmallInt,
        review_text -> Text,
        approved -> Bool,
        approval_token -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(bookings -> tours (tour_id));
joinable!(reviews -> tours (tour_id));

///////////////////////////////////////////////////////////////////////
// Gallery
///////////////////////////////////////////////////////////////////////

table! {
    gallery (id) {
        id -> BigInt,
        title -> Nullable<Text>,
        image_url -> Text,
        category -> Nullable<Text>,
        alt_text -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Donations
///////////////////////////////////////////////////////////////////////

table! {
    donation_types (id) {
        id -> BigInt,
        title -> Text,
        amount -> Double,
        description -> Nullable<Text>,
        icon_color -> Nullable<Text>,
        benefits -> Text,
        is_active -> Bool,
        sort_order -> Integer,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    donations (id) {
        id -> BigInt,
        donation_type_id -> Nullable<BigInt>,
        name -> Nullable<Text>,
        email -> Nullable<Text>,
        amount -> Double,
        payment_method -> Text,
        transaction_id -> Nullable<Text>,
        status -> Text,
        message -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(donations -> donation_types (donation_type_id));

///////////////////////////////////////////////////////////////////////
// Support page
///////////////////////////////////////////////////////////////////////

table! {
    support_settings (id) {
        id -> BigInt,
        hero_kicker -> Nullable<Text>,
        hero_title -> Nullable<Text>,
        hero_subtitle -> Nullable<Text>,
        hero_description -> Nullable<Text>,
        hero_cta_label -> Nullable<Text>,
        hero_cta_link -> Nullable<Text>,
        stats_label_one -> Nullable<Text>,
        stats_value_one -> Nullable<Text>,
        stats_label_two -> Nullable<Text>,
        stats_value_two -> Nullable<Text>,
        stats_label_three -> Nullable<Text>,
        stats_value_three -> Nullable<Text>,
        custom_title -> Nullable<Text>,
        custom_description -> Nullable<Text>,
        custom_button_label -> Nullable<Text>,
        custom_button_link -> Nullable<Text>,
        updated_at -> Nullable<BigInt>,
    }
}

table! {
    support_causes (id) {
        id -> BigInt,
        title -> Text,
        description -> Text,
        icon -> Nullable<Text>,
        sort_order -> Integer,
        is_active -> Bool,
    }
}

table! {
    payment_methods (id) {
        id -> BigInt,
        name -> Text,
        tagline -> Nullable<Text>,
        description -> Nullable<Text>,
        integration_key -> Text,
        button_label -> Nullable<Text>,
        icon -> Nullable<Text>,
        currency -> Text,
        config -> Text,
        sort_order -> Integer,
        is_active -> Bool,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    sessions,
    tours,
    bookings,
    reviews,
    gallery,
    donation_types,
    donations,
    support_settings,
    support_causes,
    payment_methods,
);
