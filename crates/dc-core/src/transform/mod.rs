//! Player transformations
//!
//! The form registry ([`get_form`]), the equipment melding controller and
//! the state machine that moves the player between forms ([`transform`],
//! [`untransform`]).

mod appendage;
mod behavior;
mod data;
mod form;
mod machine;
mod melding;
mod safety;
mod swimming;

pub use appendage::{APPENDAGES, beastly_level, select_appendages};
pub use form::{
    AttackVerbs, BAD_DURATION, Capability, DEFAULT_DURATION, FakeMutation, Form, FormDuration,
    PowerScaling, Resist, Transformation, UnarmedBrand, blade_parts, form_base_movespeed,
    form_can_bleed, form_can_fly, form_can_swim, form_can_wear, form_can_wield,
    form_changed_physiology, form_for_index, form_hp_mod, form_keeps_mutations, form_likes_water,
    get_form, transform_mons, transform_name,
};
pub use machine::{
    AutoConfirm, Prompt, TransformOutcome, TransformRequest, emergency_untransform,
    report_failure, transform, untransform, vampire_update_transformations,
};
pub use melding::{
    ash_check_bondage, describe_melding, equipment_removal, flying_in_new_form, remove_equipment,
    remove_one_equip, unmeld_equipment, unmeld_one_equip,
};
pub use safety::{
    UndeadFormReason, check_form_stat_safety, feat_dangerous_for_form, lifeless_prevents_form,
    transformation_is_safe,
};
pub use swimming::{merfolk_check_swimming, merfolk_start_swimming, merfolk_stop_swimming};
