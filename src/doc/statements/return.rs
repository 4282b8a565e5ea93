/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. Returning while a `FOR` or `DO` started inside the
subroutine is still open is an error.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
