//! Per-operation request validation.
//!
//! Every rule is checked in a fixed order and the first violation is
//! returned, so callers (and tests) can rely on the exact
//! [`ValidationError`](crate::error::ValidationError) produced for a given
//! malformed request. Validation is pure: no I/O, no clock, no randomness.

use crate::{
    apis::{
        account_balance::AccountBalanceRequest,
        b2b::{BusinessPayBillRequest, RemitTaxRequest},
        b2c::B2CPaymentRequest,
        c2b::{C2BRegisterUrlRequest, C2BSimulateRequest},
        express::{ExpressQueryRequest, ExpressSimulateRequest},
        qr::GenerateQrRequest,
        reversal::ReverseRequest,
        transaction_status::TransactionStatusRequest,
    },
    error::ValidationError,
};
use std::ops::RangeInclusive;

/// A phone number is an MSISDN of exactly 12 digits, country code included.
const PHONE_NUMBER_RANGE: RangeInclusive<u64> = 100_000_000_000..=999_999_999_999;

/// A short code is a 5 to 7 digit organization identifier.
const SHORT_CODE_RANGE: RangeInclusive<u64> = 10_000..=9_999_999;

const MAX_ACCOUNT_REFERENCE_LEN: usize = 12;
const MAX_TRANSACTION_DESC_LEN: usize = 13;
const MAX_REMARKS_LEN: usize = 100;
const MAX_OCCASION_LEN: usize = 100;

fn phone_number(number: u64) -> Result<(), ValidationError> {
    if PHONE_NUMBER_RANGE.contains(&number) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber(number))
    }
}

fn short_code(code: u64) -> Result<(), ValidationError> {
    if SHORT_CODE_RANGE.contains(&code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidShortCode(code))
    }
}

fn url(s: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidUrl(s.to_string());
    let parsed = reqwest::Url::parse(s).map_err(|_| invalid())?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid()),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    Ok(())
}

// Length ceilings are measured in bytes, matching what the gateway counts.
fn max_len(s: &str, limit: usize, error: ValidationError) -> Result<(), ValidationError> {
    if s.len() > limit {
        Err(error)
    } else {
        Ok(())
    }
}

fn identifier_type(identifier: u32) -> Result<(), ValidationError> {
    match identifier {
        1 | 2 | 4 => Ok(()),
        other => Err(ValidationError::InvalidIdentifierType(other)),
    }
}

pub(crate) fn express_simulate(req: &ExpressSimulateRequest) -> Result<(), ValidationError> {
    short_code(req.business_short_code)?;
    short_code(req.party_b)?;
    phone_number(req.party_a)?;
    phone_number(req.phone_number)?;
    match req.transaction_type.as_str() {
        "CustomerPayBillOnline" | "CustomerBuyGoodsOnline" => {}
        other => return Err(ValidationError::InvalidTransactionType(other.to_string())),
    }
    max_len(
        &req.account_reference,
        MAX_ACCOUNT_REFERENCE_LEN,
        ValidationError::InvalidAccountReference,
    )?;
    max_len(
        &req.transaction_desc,
        MAX_TRANSACTION_DESC_LEN,
        ValidationError::InvalidTransactionDesc,
    )?;
    url(&req.call_back_url)
}

pub(crate) fn express_query(req: &ExpressQueryRequest) -> Result<(), ValidationError> {
    short_code(req.business_short_code)
}

pub(crate) fn b2c_payment(req: &B2CPaymentRequest) -> Result<(), ValidationError> {
    match req.command_id.as_str() {
        "BusinessPayment" | "SalaryPayment" | "PromotionPayment" => {}
        other => return Err(ValidationError::InvalidCommandId(other.to_string())),
    }
    short_code(req.party_a)?;
    phone_number(req.party_b)?;
    url(&req.queue_time_out_url)?;
    url(&req.result_url)?;
    max_len(&req.remarks, MAX_REMARKS_LEN, ValidationError::InvalidRemarks)?;
    max_len(&req.occasion, MAX_OCCASION_LEN, ValidationError::InvalidOccasion)
}

pub(crate) fn business_pay_bill(req: &BusinessPayBillRequest) -> Result<(), ValidationError> {
    if req.command_id != "BusinessPayBill" {
        return Err(ValidationError::InvalidCommandId(req.command_id.clone()));
    }
    // B2B transfers are short code to short code, so both sides must use the
    // organization identifier type.
    if req.sender_identifier_type != 4 {
        return Err(ValidationError::InvalidIdentifierType(
            req.sender_identifier_type,
        ));
    }
    if req.receiver_identifier_type != 4 {
        return Err(ValidationError::InvalidIdentifierType(
            req.receiver_identifier_type,
        ));
    }
    short_code(req.party_a)?;
    short_code(req.party_b)?;
    max_len(
        &req.account_reference,
        MAX_ACCOUNT_REFERENCE_LEN,
        ValidationError::InvalidAccountReference,
    )?;
    max_len(&req.remarks, MAX_REMARKS_LEN, ValidationError::InvalidRemarks)?;
    url(&req.queue_time_out_url)?;
    url(&req.result_url)
}

pub(crate) fn account_balance(req: &AccountBalanceRequest) -> Result<(), ValidationError> {
    if req.command_id != "AccountBalance" {
        return Err(ValidationError::InvalidCommandId(req.command_id.clone()));
    }
    identifier_type(req.identifier_type)?;
    url(&req.queue_time_out_url)?;
    url(&req.result_url)
}

pub(crate) fn c2b_register_url(req: &C2BRegisterUrlRequest) -> Result<(), ValidationError> {
    short_code(req.short_code)?;
    match req.response_type.as_str() {
        "Completed" | "Cancelled" => {}
        other => return Err(ValidationError::InvalidResponseType(other.to_string())),
    }
    url(&req.confirmation_url)?;
    url(&req.validation_url)
}

pub(crate) fn c2b_simulate(req: &C2BSimulateRequest) -> Result<(), ValidationError> {
    match req.command_id.as_str() {
        "CustomerPayBillOnline" | "CustomerBuyGoodsOnline" => Ok(()),
        other => Err(ValidationError::InvalidCommandId(other.to_string())),
    }
}

pub(crate) fn generate_qr(req: &GenerateQrRequest) -> Result<(), ValidationError> {
    match req.trx_code.as_str() {
        "SB" | "SM" | "PB" | "WA" | "BG" => Ok(()),
        other => Err(ValidationError::InvalidTransactionType(other.to_string())),
    }
}

pub(crate) fn reverse(req: &ReverseRequest) -> Result<(), ValidationError> {
    if req.command_id != "TransactionReversal" {
        return Err(ValidationError::InvalidCommandId(req.command_id.clone()));
    }
    url(&req.queue_time_out_url)?;
    url(&req.result_url)
}

pub(crate) fn transaction_status(req: &TransactionStatusRequest) -> Result<(), ValidationError> {
    if req.command_id != "TransactionStatusQuery" {
        return Err(ValidationError::InvalidCommandId(req.command_id.clone()));
    }
    max_len(&req.remarks, MAX_REMARKS_LEN, ValidationError::InvalidRemarks)?;
    max_len(&req.occasion, MAX_OCCASION_LEN, ValidationError::InvalidOccasion)?;
    identifier_type(req.identifier_type)?;
    url(&req.queue_time_out_url)?;
    url(&req.result_url)
}

pub(crate) fn remit_tax(req: &RemitTaxRequest) -> Result<(), ValidationError> {
    if req.command_id != "PayTaxToKRA" {
        return Err(ValidationError::InvalidCommandId(req.command_id.clone()));
    }
    max_len(&req.remarks, MAX_REMARKS_LEN, ValidationError::InvalidRemarks)?;
    url(&req.queue_time_out_url)?;
    url(&req.result_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn express_simulate_request() -> ExpressSimulateRequest {
        ExpressSimulateRequest {
            business_short_code: 174379,
            password: "cGFzc3dvcmQ=".to_string(),
            timestamp: "20230907195244".to_string(),
            transaction_type: "CustomerPayBillOnline".to_string(),
            amount: 10,
            party_a: 254708374149,
            party_b: 174379,
            phone_number: 254708374149,
            call_back_url: "https://example.com/callback".to_string(),
            account_reference: "CompanyX".to_string(),
            transaction_desc: "Payment".to_string(),
        }
    }

    fn b2c_request() -> B2CPaymentRequest {
        B2CPaymentRequest {
            originator_conversation_id: None,
            initiator_name: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "BusinessPayment".to_string(),
            amount: 10,
            party_a: 600999,
            party_b: 254708374149,
            remarks: "Test remarks".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            result_url: "https://example.com/result".to_string(),
            occasion: "Test".to_string(),
        }
    }

    fn business_pay_bill_request() -> BusinessPayBillRequest {
        BusinessPayBillRequest {
            initiator: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "BusinessPayBill".to_string(),
            sender_identifier_type: 4,
            receiver_identifier_type: 4,
            amount: 10,
            party_a: 600999,
            party_b: 600000,
            account_reference: "353353".to_string(),
            requester: Some(254708374149),
            remarks: "OK".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            result_url: "https://example.com/result".to_string(),
        }
    }

    fn account_balance_request() -> AccountBalanceRequest {
        AccountBalanceRequest {
            initiator: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "AccountBalance".to_string(),
            party_a: 600999,
            identifier_type: 4,
            remarks: "Balance".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            result_url: "https://example.com/result".to_string(),
        }
    }

    fn transaction_status_request() -> TransactionStatusRequest {
        TransactionStatusRequest {
            initiator: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "TransactionStatusQuery".to_string(),
            transaction_id: "OEI2AK4Q16".to_string(),
            originator_conversation_id: None,
            party_a: 600999,
            identifier_type: 4,
            result_url: "https://example.com/result".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            remarks: "Status".to_string(),
            occasion: "Check".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_requests() {
        assert_eq!(express_simulate(&express_simulate_request()), Ok(()));
        assert_eq!(b2c_payment(&b2c_request()), Ok(()));
        assert_eq!(business_pay_bill(&business_pay_bill_request()), Ok(()));
        assert_eq!(account_balance(&account_balance_request()), Ok(()));
        assert_eq!(transaction_status(&transaction_status_request()), Ok(()));
    }

    #[test]
    fn express_simulate_rejects_bad_short_codes() {
        let mut req = express_simulate_request();
        req.business_short_code = 1;
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidShortCode(1))
        );

        let mut req = express_simulate_request();
        req.party_b = 10_000_000;
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidShortCode(10_000_000))
        );
    }

    #[test]
    fn express_simulate_rejects_bad_phone_numbers() {
        let mut req = express_simulate_request();
        req.party_a = 708374149; // Missing the country code
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidPhoneNumber(708374149))
        );

        let mut req = express_simulate_request();
        req.phone_number = 1_000_000_000_000;
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidPhoneNumber(1_000_000_000_000))
        );
    }

    #[test]
    fn express_simulate_rejects_unknown_transaction_type() {
        let mut req = express_simulate_request();
        req.transaction_type = "SalaryPayment".to_string();
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidTransactionType(
                "SalaryPayment".to_string()
            ))
        );
    }

    #[test]
    fn express_simulate_enforces_length_ceilings() {
        let mut req = express_simulate_request();
        req.account_reference = "X".repeat(13);
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidAccountReference)
        );

        let mut req = express_simulate_request();
        req.transaction_desc = "X".repeat(14);
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidTransactionDesc)
        );

        // Ceilings are in bytes, not characters
        let mut req = express_simulate_request();
        req.account_reference = "é".repeat(7); // 14 bytes
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidAccountReference)
        );
    }

    #[test]
    fn express_simulate_rejects_malformed_callback_urls() {
        for bad in ["not a url", "ftp://example.com/cb", "https://"] {
            let mut req = express_simulate_request();
            req.call_back_url = bad.to_string();
            assert_eq!(
                express_simulate(&req),
                Err(ValidationError::InvalidUrl(bad.to_string())),
                "URL: {}",
                bad
            );
        }
    }

    #[test]
    fn first_violated_rule_wins() {
        // Both the short code and the callback URL are broken; the short code
        // rule is checked first.
        let mut req = express_simulate_request();
        req.business_short_code = 1;
        req.call_back_url = "not a url".to_string();
        assert_eq!(
            express_simulate(&req),
            Err(ValidationError::InvalidShortCode(1))
        );
    }

    #[test]
    fn express_query_checks_short_code_only() {
        let req = ExpressQueryRequest {
            business_short_code: 1,
            password: "cGFzc3dvcmQ=".to_string(),
            timestamp: "20230907195244".to_string(),
            checkout_request_id: "ws_CO_07092023195244460720136609".to_string(),
        };
        assert_eq!(express_query(&req), Err(ValidationError::InvalidShortCode(1)));

        let req = ExpressQueryRequest {
            business_short_code: 174379,
            ..req
        };
        assert_eq!(express_query(&req), Ok(()));
    }

    #[test]
    fn b2c_payment_rejects_unknown_command() {
        let mut req = b2c_request();
        req.command_id = "SendMoney".to_string();
        assert_eq!(
            b2c_payment(&req),
            Err(ValidationError::InvalidCommandId("SendMoney".to_string()))
        );
    }

    #[test]
    fn b2c_payment_checks_parties_and_urls() {
        let mut req = b2c_request();
        req.party_a = 254708374149; // Phone number where a short code is expected
        assert_eq!(
            b2c_payment(&req),
            Err(ValidationError::InvalidShortCode(254708374149))
        );

        let mut req = b2c_request();
        req.party_b = 600999;
        assert_eq!(
            b2c_payment(&req),
            Err(ValidationError::InvalidPhoneNumber(600999))
        );

        let mut req = b2c_request();
        req.queue_time_out_url = "nope".to_string();
        assert_eq!(
            b2c_payment(&req),
            Err(ValidationError::InvalidUrl("nope".to_string()))
        );

        let mut req = b2c_request();
        req.remarks = "r".repeat(101);
        assert_eq!(b2c_payment(&req), Err(ValidationError::InvalidRemarks));

        let mut req = b2c_request();
        req.occasion = "o".repeat(101);
        assert_eq!(b2c_payment(&req), Err(ValidationError::InvalidOccasion));
    }

    #[test]
    fn business_pay_bill_requires_organization_identifiers() {
        let mut req = business_pay_bill_request();
        req.command_id = "BusinessBuyGoods".to_string();
        assert_eq!(
            business_pay_bill(&req),
            Err(ValidationError::InvalidCommandId(
                "BusinessBuyGoods".to_string()
            ))
        );

        let mut req = business_pay_bill_request();
        req.sender_identifier_type = 1;
        assert_eq!(
            business_pay_bill(&req),
            Err(ValidationError::InvalidIdentifierType(1))
        );

        let mut req = business_pay_bill_request();
        req.receiver_identifier_type = 2;
        assert_eq!(
            business_pay_bill(&req),
            Err(ValidationError::InvalidIdentifierType(2))
        );

        let mut req = business_pay_bill_request();
        req.party_b = 999;
        assert_eq!(
            business_pay_bill(&req),
            Err(ValidationError::InvalidShortCode(999))
        );

        let mut req = business_pay_bill_request();
        req.account_reference = "A".repeat(13);
        assert_eq!(
            business_pay_bill(&req),
            Err(ValidationError::InvalidAccountReference)
        );
    }

    #[test]
    fn account_balance_rejects_unknown_command() {
        let mut req = account_balance_request();
        req.command_id = "NotAccountBalance".to_string();
        assert_eq!(
            account_balance(&req),
            Err(ValidationError::InvalidCommandId(
                "NotAccountBalance".to_string()
            ))
        );
    }

    #[test]
    fn account_balance_checks_identifier_and_urls() {
        let mut req = account_balance_request();
        req.identifier_type = 3;
        assert_eq!(
            account_balance(&req),
            Err(ValidationError::InvalidIdentifierType(3))
        );

        let mut req = account_balance_request();
        req.result_url = "ftp://example.com".to_string();
        assert_eq!(
            account_balance(&req),
            Err(ValidationError::InvalidUrl("ftp://example.com".to_string()))
        );
    }

    #[test]
    fn c2b_register_url_rules() {
        let req = C2BRegisterUrlRequest {
            short_code: 600999,
            response_type: "Completed".to_string(),
            confirmation_url: "https://example.com/confirm".to_string(),
            validation_url: "https://example.com/validate".to_string(),
        };
        assert_eq!(c2b_register_url(&req), Ok(()));

        let mut bad = req.clone();
        bad.short_code = 1;
        assert_eq!(
            c2b_register_url(&bad),
            Err(ValidationError::InvalidShortCode(1))
        );

        let mut bad = req.clone();
        bad.response_type = "Canceled".to_string();
        assert_eq!(
            c2b_register_url(&bad),
            Err(ValidationError::InvalidResponseType("Canceled".to_string()))
        );

        let mut bad = req;
        bad.validation_url = "not a url".to_string();
        assert_eq!(
            c2b_register_url(&bad),
            Err(ValidationError::InvalidUrl("not a url".to_string()))
        );
    }

    #[test]
    fn c2b_simulate_checks_command_only() {
        let req = C2BSimulateRequest {
            short_code: 600999,
            command_id: "CustomerBuyGoodsOnline".to_string(),
            amount: 10,
            msisdn: 254708374149,
            bill_ref_number: "account".to_string(),
        };
        assert_eq!(c2b_simulate(&req), Ok(()));

        let mut bad = req;
        bad.command_id = "BusinessPayment".to_string();
        assert_eq!(
            c2b_simulate(&bad),
            Err(ValidationError::InvalidCommandId(
                "BusinessPayment".to_string()
            ))
        );
    }

    #[test]
    fn generate_qr_accepts_known_trx_codes_only() {
        for code in ["SB", "SM", "PB", "WA", "BG"] {
            let req = GenerateQrRequest {
                merchant_name: "TEST SUPERMARKET".to_string(),
                ref_no: "Invoice No".to_string(),
                amount: 10,
                trx_code: code.to_string(),
                cpi: "174379".to_string(),
                size: "300".to_string(),
            };
            assert_eq!(generate_qr(&req), Ok(()), "TrxCode: {}", code);
        }

        let req = GenerateQrRequest {
            merchant_name: "TEST SUPERMARKET".to_string(),
            ref_no: "Invoice No".to_string(),
            amount: 10,
            trx_code: "XX".to_string(),
            cpi: "174379".to_string(),
            size: "300".to_string(),
        };
        assert_eq!(
            generate_qr(&req),
            Err(ValidationError::InvalidTransactionType("XX".to_string()))
        );
    }

    #[test]
    fn reverse_rules() {
        let req = ReverseRequest {
            initiator: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "TransactionReversal".to_string(),
            transaction_id: "OEI2AK4Q16".to_string(),
            amount: 10,
            receiver_party: 600999,
            receiver_identifier_type: 11,
            result_url: "https://example.com/result".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            remarks: "Reversal".to_string(),
            occasion: String::new(),
        };
        assert_eq!(reverse(&req), Ok(()));

        let mut bad = req.clone();
        bad.command_id = "Reversal".to_string();
        assert_eq!(
            reverse(&bad),
            Err(ValidationError::InvalidCommandId("Reversal".to_string()))
        );

        let mut bad = req;
        bad.queue_time_out_url = String::new();
        assert_eq!(
            reverse(&bad),
            Err(ValidationError::InvalidUrl(String::new()))
        );
    }

    #[test]
    fn transaction_status_rules() {
        let mut req = transaction_status_request();
        req.command_id = "StatusQuery".to_string();
        assert_eq!(
            transaction_status(&req),
            Err(ValidationError::InvalidCommandId("StatusQuery".to_string()))
        );

        let mut req = transaction_status_request();
        req.remarks = "r".repeat(101);
        assert_eq!(
            transaction_status(&req),
            Err(ValidationError::InvalidRemarks)
        );

        let mut req = transaction_status_request();
        req.identifier_type = 7;
        assert_eq!(
            transaction_status(&req),
            Err(ValidationError::InvalidIdentifierType(7))
        );
    }

    #[test]
    fn remit_tax_rules() {
        let req = RemitTaxRequest {
            initiator: "testapi".to_string(),
            initiator_password: "Safaricom999!*!".to_string(),
            security_credential: String::new(),
            command_id: "PayTaxToKRA".to_string(),
            sender_identifier_type: 4,
            receiver_identifier_type: 4,
            amount: 10,
            party_a: 600999,
            party_b: 572572,
            account_reference: "353353".to_string(),
            remarks: "Tax".to_string(),
            queue_time_out_url: "https://example.com/timeout".to_string(),
            result_url: "https://example.com/result".to_string(),
        };
        assert_eq!(remit_tax(&req), Ok(()));

        let mut bad = req.clone();
        bad.command_id = "RemitTax".to_string();
        assert_eq!(
            remit_tax(&bad),
            Err(ValidationError::InvalidCommandId("RemitTax".to_string()))
        );

        let mut bad = req;
        bad.remarks = "r".repeat(101);
        assert_eq!(remit_tax(&bad), Err(ValidationError::InvalidRemarks));
    }
}
