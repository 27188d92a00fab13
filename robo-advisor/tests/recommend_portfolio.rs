use maplit::hashmap;
use robo_advisor::{dispatch, handle, AdvisorError};
use robo_advisor_lex::{lambda::Context, request, DialogAction, FulfillmentState, LexEvent, LexResponse};
use serde_json::{json, Value};

fn event(source: &str, intent: &str, slots: Value) -> LexEvent {
    serde_json::from_value(json!({
        "messageVersion": "1.0",
        "invocationSource": source,
        "userId": "test-user",
        "sessionAttributes": { "channel": "test" },
        "currentIntent": {
            "name": intent,
            "slots": slots,
            "confirmationStatus": "None"
        }
    }))
    .expect("failed to build event")
}

fn dialog(slots: Value) -> LexEvent {
    event("DialogCodeHook", "RecommendPortfolio", slots)
}

fn fulfillment(slots: Value) -> LexEvent {
    event("FulfillmentCodeHook", "RecommendPortfolio", slots)
}

fn elicited_slot(response: &LexResponse) -> &str {
    match &response.dialog_action {
        DialogAction::ElicitSlot { slot_to_elicit, .. } => slot_to_elicit,
        other => panic!("expected ElicitSlot, got {:?}", other),
    }
}

fn close_message(response: &LexResponse) -> &str {
    match &response.dialog_action {
        DialogAction::Close {
            fulfillment_state,
            message,
        } => {
            assert_eq!(*fulfillment_state, FulfillmentState::Fulfilled);
            &message.content
        }
        other => panic!("expected Close, got {:?}", other),
    }
}

#[test]
fn negative_age_is_elicited_again() {
    let response = dispatch(dialog(json!({
        "firstName": "Ana", "age": "-1", "investmentAmount": null, "riskLevel": null
    })))
    .expect("dispatch failed");
    assert_eq!(elicited_slot(&response), "age");
}

#[test]
fn retirement_age_is_elicited_again() {
    let response = dispatch(dialog(json!({
        "firstName": "Ana", "age": "65", "investmentAmount": null, "riskLevel": null
    })))
    .expect("dispatch failed");
    assert_eq!(elicited_slot(&response), "age");
}

#[test]
fn small_investment_is_elicited_again() {
    let response = dispatch(dialog(json!({
        "firstName": "Ana", "age": "30", "investmentAmount": "4000", "riskLevel": null
    })))
    .expect("dispatch failed");
    assert_eq!(elicited_slot(&response), "investmentAmount");
}

#[test]
fn elicit_clears_the_invalid_slot_and_keeps_the_session() {
    let response = dispatch(dialog(json!({
        "firstName": "Ana", "age": "30", "investmentAmount": "4000", "riskLevel": null
    })))
    .expect("dispatch failed");
    assert_eq!(
        serde_json::to_value(&response).expect("failed to serialize response"),
        json!({
            "sessionAttributes": { "channel": "test" },
            "dialogAction": {
                "type": "ElicitSlot",
                "intentName": "RecommendPortfolio",
                "slots": { "firstName": "Ana", "age": "30", "investmentAmount": null, "riskLevel": null },
                "slotToElicit": "investmentAmount",
                "message": {
                    "contentType": "PlainText",
                    "content": "The investment amount selected cannot be used, please provide amount of $5,000 or greater"
                }
            }
        })
    );
}

#[test]
fn non_numeric_age_is_elicited_again() {
    let response = dispatch(dialog(json!({ "age": "thirty" }))).expect("dispatch failed");
    assert_eq!(elicited_slot(&response), "age");
}

#[test]
fn valid_slots_are_delegated() {
    let response = dispatch(dialog(json!({
        "firstName": "Ana", "age": "30", "investmentAmount": "5000", "riskLevel": null
    })))
    .expect("dispatch failed");
    assert_eq!(
        response,
        LexResponse::delegate(
            hashmap! { "channel".to_string() => "test".to_string() },
            hashmap! {
                "firstName".to_string() => Some("Ana".to_string()),
                "age".to_string() => Some("30".to_string()),
                "investmentAmount".to_string() => Some("5000".to_string()),
                "riskLevel".to_string() => None,
            }
        )
    );
}

#[test]
fn fulfillment_recommends_from_the_risk_table() {
    let response = dispatch(fulfillment(json!({
        "firstName": "Ana", "age": "30", "investmentAmount": "5000", "riskLevel": "Low"
    })))
    .expect("dispatch failed");
    let message = close_message(&response);
    assert!(message.starts_with("Ana thank you for your information;"));
    assert!(message.contains("60% bonds (AGG), 40% equities (SPY)"));
    assert_eq!(response.session_attributes["channel"], "test");
}

#[test]
fn fulfillment_requires_a_known_risk_level() {
    let err = dispatch(fulfillment(json!({
        "firstName": "Ana", "age": "30", "investmentAmount": "5000", "riskLevel": "Reckless"
    })))
    .expect_err("dispatch should fail");
    assert_eq!(err, AdvisorError::UnknownRiskLevel("Reckless".to_string()));
}

#[test]
fn fulfillment_requires_a_first_name() {
    let err = dispatch(fulfillment(json!({
        "firstName": null, "age": "30", "investmentAmount": "5000", "riskLevel": "Low"
    })))
    .expect_err("dispatch should fail");
    assert_eq!(err, AdvisorError::MissingSlot("firstName"));
}

#[test]
fn unsupported_intent_is_an_error() {
    let err = dispatch(event("DialogCodeHook", "OrderFlowers", json!({}))).expect_err("dispatch should fail");
    assert_eq!(err.to_string(), "Intent with name OrderFlowers not supported");
}

#[test]
fn missing_intent_is_an_error() {
    let event = request::from_str(r#"{"invocationSource":"DialogCodeHook"}"#).expect("failed to parse event");
    assert_eq!(dispatch(event), Err(AdvisorError::MissingIntent));
}

#[tokio::test]
async fn handles_recorded_lex_event() {
    let event = request::from_str(include_str!("data/recommend_portfolio_dialog.json")).expect("failed to parse event");
    let response = handle(event, Context::default()).await.expect("handler failed");
    assert_eq!(elicited_slot(&response), "age");
    assert_eq!(response.session_attributes["returningUser"], "true");
}
