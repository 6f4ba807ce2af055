/*!
# `LED ON|OFF`

## Purpose
Switch the LED.

## Remarks
`ON` and `OFF` may be written in any case.

## Example
```text
LED on
```

*/
